use num_traits::{One, PrimInt};

/// Trait implemented by flag enums.
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
/// The backing integer type is chosen via the associated `Storage`.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain bitmask container, one bit per flag.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits | tag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, tag: U) {
        self.bits = self.bits & !tag.mask();
    }

    /// Set or clear `tag` depending on `on`.
    pub fn set<U: FlagBitmask<Storage = T>>(&mut self, tag: U, on: bool) {
        if on {
            self.add(tag);
        } else {
            self.remove(tag);
        }
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, tag: U) -> bool {
        (self.bits & tag.mask()) != T::zero()
    }
}

/// Declare a bitmask-backed enum and implement `FlagBitmask` for it.
///
/// Example:
/// ```text
/// define_bitmask_flags!(MoveKey, u8, {
///     Forward,
///     Backward,
/// });
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($(#[$meta:meta])* $name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::bitmask_flags::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}
