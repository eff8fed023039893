//! Fixed-arity call sugar.
//!
//! `Call` provides `call0` through `call9`: thin adapters that build a
//! fresh argument list from their positionals and delegate to the single
//! canonical [`Callable::invoke`]. The forms carry no logic of their own —
//! calling `call0()` and invoking with an explicitly-empty list are
//! observably identical. A callable needing more than nine positional
//! arguments takes an explicit [`List`] instead.

use vega_value::{Callable, List, Value};

macro_rules! arity_calls {
    ($( $(#[$meta:meta])* $method:ident => ( $( $arg:ident ),* ) );* $(;)?) => {
        /// Fixed-arity invocation forms, implemented for every [`Callable`].
        ///
        /// Arguments are anything convertible into a [`Value`], so integer
        /// and string literals work directly: `add.call2(1, 2)`.
        pub trait Call {
            $(
                $(#[$meta])*
                fn $method(&self $(, $arg: impl Into<Value>)* ) -> Value;
            )*
        }

        impl<C: Callable + ?Sized> Call for C {
            $(
                fn $method(&self $(, $arg: impl Into<Value>)* ) -> Value {
                    #[allow(unused_mut)]
                    let mut args = List::new();
                    $( args.push($arg.into()); )*
                    self.invoke(Some(&args))
                }
            )*
        }
    };
}

arity_calls! {
    /// Invoke with no arguments.
    call0 => ();
    /// Invoke with one positional argument.
    call1 => (a0);
    /// Invoke with two positional arguments.
    call2 => (a0, a1);
    /// Invoke with three positional arguments.
    call3 => (a0, a1, a2);
    /// Invoke with four positional arguments.
    call4 => (a0, a1, a2, a3);
    /// Invoke with five positional arguments.
    call5 => (a0, a1, a2, a3, a4);
    /// Invoke with six positional arguments.
    call6 => (a0, a1, a2, a3, a4, a5);
    /// Invoke with seven positional arguments.
    call7 => (a0, a1, a2, a3, a4, a5, a6);
    /// Invoke with eight positional arguments.
    call8 => (a0, a1, a2, a3, a4, a5, a6, a7);
    /// Invoke with nine positional arguments.
    call9 => (a0, a1, a2, a3, a4, a5, a6, a7, a8);
}
