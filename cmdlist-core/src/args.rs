/// Argument tuple bound to a stored command.
///
/// Implemented for tuples of arity 0 through 12. The tuple fixes both the
/// parameter list and, through `Callable`, the function-pointer type every
/// entry of a list must have. A function with the wrong arity or parameter
/// types does not coerce to `Callable`, so mismatches fail to compile.
pub trait CommandArgs<R>: Sized {
    /// Function reference matching `R(P1, .., Pn)`.
    type Callable: Copy;

    /// Call `callable` with the tuple elements as positional arguments.
    fn apply(callable: Self::Callable, args: Self) -> R;
}

macro_rules! impl_command_args {
    ($($P:ident),*) => {
        impl<R, $($P),*> CommandArgs<R> for ($($P,)*) {
            type Callable = fn($($P),*) -> R;

            #[allow(non_snake_case)]
            #[inline]
            fn apply(callable: Self::Callable, ($($P,)*): Self) -> R {
                callable($($P),*)
            }
        }
    };
}

impl_command_args!();
impl_command_args!(P0);
impl_command_args!(P0, P1);
impl_command_args!(P0, P1, P2);
impl_command_args!(P0, P1, P2, P3);
impl_command_args!(P0, P1, P2, P3, P4);
impl_command_args!(P0, P1, P2, P3, P4, P5);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6, P7);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6, P7, P8);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_command_args!(P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
