//! Convenience macros.

/// Generates `From<Foo> for E` and `TryFrom<E> for Foo` impls for `enum E { Foo(Foo), Bar(Bar) }`
///
/// # Example
///
/// ```ignore
/// impl_from_typed!(Var(VarId), Class(ClassId) for DeclId);
/// ```
#[macro_export]
macro_rules! impl_from_typed {
    ($($variant:ident ($ty:ty)),* for $enum:ident) => {
        $(
            impl From<$ty> for $enum {
                fn from(it: $ty) -> $enum {
                    $enum::$variant(it)
                }
            }
            impl TryFrom<$enum> for $ty {
                type Error = ();

                fn try_from(it: $enum) -> Result<$ty, ()> {
                    if let $enum::$variant(it) = it {
                        Ok(it)
                    } else {
                        Err(())
                    }
                }
            }
        )*
    }
}

/// Generates `From<u32> for I`, `From<I> for u32` and the matching `usize` conversions for an
/// index newtype `struct I(u32)` so that it can key a `TiVec`.
///
/// # Example
///
/// ```ignore
/// impl_idx_from!(VarId(u32));
/// ```
#[macro_export]
macro_rules! impl_idx_from {
    ($ty:ident($raw: ident)) => {
        impl From<$raw> for $ty {
            #[inline(always)]
            fn from(it: $raw) -> $ty {
                $ty(it)
            }
        }

        impl From<$ty> for $raw {
            #[inline(always)]
            fn from(it: $ty) -> $raw {
                it.0
            }
        }

        impl From<usize> for $ty {
            #[inline(always)]
            fn from(it: usize) -> $ty {
                ::std::debug_assert!(it < $raw::MAX as usize);
                $ty(it as $raw)
            }
        }

        impl From<$ty> for usize {
            #[inline(always)]
            fn from(it: $ty) -> usize {
                it.0 as usize
            }
        }
    };
}

/// Generates a Display implementation
///
/// # Example
///
/// ```ignore
/// impl_display! {
///     match LookupReason{
///         LookupReason::LookingForType => "type";
///         LookupReason::LookingForClass => "class";
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_display {
    ( $($args: tt)*) => {
        $crate::impl_fmt!(Display $($args)*);
    };
}

/// Generates matching Debug and Display implementations
///
/// # Example
///
/// ```ignore
/// impl_debug_display! {id @ VarId => "var{}", id.0}
/// ```
#[macro_export]
macro_rules! impl_debug_display {
    ( $($args: tt)*) => {
        $crate::impl_fmt!(Debug $($args)*);
        $crate::impl_fmt!(Display $($args)*);
    };
}

/// Generates an implementation of the specified fmt trait, either by matching on `self` or by
/// binding `self` to a name.
#[macro_export]
macro_rules! impl_fmt {
    (  $trait:ident  match $ty: ident{ $($variant: pat => $fmt:literal $(, $fmt_arg: expr)*;)*}) => {
        impl std::fmt::$trait for $ty{
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self{
                    $( $variant => write!(f, $fmt $(,$fmt_arg)*)),*
                }
            }
        }
    };

    (  $trait:ident $binding: ident @ $ty: ident => $fmt:literal $(, $fmt_arg: expr)*) => {
        impl std::fmt::$trait for $ty{
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let $binding = self;
                write!(f, $fmt $(,$fmt_arg)*)
            }
        }
    };
}
