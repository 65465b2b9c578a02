//! Macros shared by the operator impls
//!
//! `FixedDecimal` is `Copy`, so every owned-operand combination of a
//! binary operator can delegate to the borrowed-borrowed impl for
//! free. `forward_binop_to_ref_ref!` stamps out the three delegating
//! impls at once; the arithmetic itself lives on
//! `&FixedDecimal <op> &FixedDecimal`.

macro_rules! forward_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$res) -> $res {
                $imp::$method(&self, rhs)
            }
        }

        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                $imp::$method(self, &rhs)
            }
        }
    };
}

// owned-operand compound assignment, delegating to the &rhs impl
macro_rules! forward_assignop_to_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, rhs: $res) {
                $imp::$method(self, &rhs)
            }
        }
    };
}
