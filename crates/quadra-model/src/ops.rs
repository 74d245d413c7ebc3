//! Operator overloads.
//!
//! `+`, `-` and `*` are implemented between variables, models and numeric
//! constants (`f64`, `i32`) in every order, owned or borrowed. They panic on
//! an algebra error, the way integer overflow panics; use
//! `QuadraticModel::checked_*` or the `algebra` functions to handle errors.
//!
//! An owned model on the left of `+`/`-` is reused as the result's storage.
//! Borrowed operands are never modified.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use quadra_core::{Bias, Result};

use crate::algebra::{self, Operand};
use crate::model::QuadraticModel;
use crate::variable::Variable;

/// Borrowing view of an operator argument.
trait AsOperand {
    fn as_operand(&self) -> Operand<'_>;
}

impl AsOperand for Variable {
    fn as_operand(&self) -> Operand<'_> {
        Operand::Variable(self)
    }
}

impl AsOperand for QuadraticModel {
    fn as_operand(&self) -> Operand<'_> {
        Operand::Model(self)
    }
}

impl AsOperand for Bias {
    fn as_operand(&self) -> Operand<'_> {
        Operand::Constant(*self)
    }
}

impl AsOperand for i32 {
    fn as_operand(&self) -> Operand<'_> {
        Operand::Constant(Bias::from(*self))
    }
}

impl<T: AsOperand + ?Sized> AsOperand for &T {
    fn as_operand(&self) -> Operand<'_> {
        (**self).as_operand()
    }
}

#[track_caller]
fn expect_ok<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("{err}"))
}

/// `impl Op<Rhs> for Lhs` through an `algebra` function.
macro_rules! impl_binary_op {
    ($Op:ident, $method:ident, $func:path; $Lhs:ty => $($Rhs:ty),+) => {
        $(
            impl $Op<$Rhs> for $Lhs {
                type Output = QuadraticModel;

                #[track_caller]
                fn $method(self, rhs: $Rhs) -> QuadraticModel {
                    expect_ok($func(self.as_operand(), rhs.as_operand()))
                }
            }
        )+
    };
}

/// `impl Op<Rhs> for QuadraticModel` accumulating into the owned left side.
macro_rules! impl_accumulating_op {
    ($Op:ident, $method:ident, $scale:expr; $($Rhs:ty),+) => {
        $(
            impl $Op<$Rhs> for QuadraticModel {
                type Output = QuadraticModel;

                #[track_caller]
                fn $method(mut self, rhs: $Rhs) -> QuadraticModel {
                    expect_ok(self.accumulate(rhs.as_operand(), $scale));
                    self
                }
            }
        )+
    };
}

/// `impl OpAssign<Rhs> for QuadraticModel`.
macro_rules! impl_assign_op {
    ($Op:ident, $method:ident, $scale:expr; $($Rhs:ty),+) => {
        $(
            impl $Op<$Rhs> for QuadraticModel {
                #[track_caller]
                fn $method(&mut self, rhs: $Rhs) {
                    expect_ok(self.accumulate(rhs.as_operand(), $scale));
                }
            }
        )+
    };
}

impl_accumulating_op!(Add, add, 1.0; QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_accumulating_op!(Sub, sub, -1.0; QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Mul, mul, algebra::mul; QuadraticModel => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);

impl_binary_op!(Add, add, algebra::add; &QuadraticModel => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Sub, sub, algebra::sub; &QuadraticModel => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Mul, mul, algebra::mul; &QuadraticModel => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);

impl_binary_op!(Add, add, algebra::add; Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Sub, sub, algebra::sub; Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Mul, mul, algebra::mul; Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);

impl_binary_op!(Add, add, algebra::add; &Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Sub, sub, algebra::sub; &Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_binary_op!(Mul, mul, algebra::mul; &Variable => QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);

// Reflected forms: a constant on the left.
impl_binary_op!(Add, add, algebra::add; Bias => QuadraticModel, &QuadraticModel, Variable, &Variable);
impl_binary_op!(Sub, sub, algebra::sub; Bias => QuadraticModel, &QuadraticModel, Variable, &Variable);
impl_binary_op!(Mul, mul, algebra::mul; Bias => QuadraticModel, &QuadraticModel, Variable, &Variable);

impl_binary_op!(Add, add, algebra::add; i32 => QuadraticModel, &QuadraticModel, Variable, &Variable);
impl_binary_op!(Sub, sub, algebra::sub; i32 => QuadraticModel, &QuadraticModel, Variable, &Variable);
impl_binary_op!(Mul, mul, algebra::mul; i32 => QuadraticModel, &QuadraticModel, Variable, &Variable);

impl_assign_op!(AddAssign, add_assign, 1.0; QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);
impl_assign_op!(SubAssign, sub_assign, -1.0; QuadraticModel, &QuadraticModel, Variable, &Variable, Bias, i32);

impl MulAssign<Bias> for QuadraticModel {
    fn mul_assign(&mut self, rhs: Bias) {
        self.scale(rhs);
    }
}

impl MulAssign<i32> for QuadraticModel {
    fn mul_assign(&mut self, rhs: i32) {
        self.scale(Bias::from(rhs));
    }
}

impl Neg for QuadraticModel {
    type Output = QuadraticModel;

    fn neg(mut self) -> QuadraticModel {
        self.scale(-1.0);
        self
    }
}

impl Neg for &QuadraticModel {
    type Output = QuadraticModel;

    fn neg(self) -> QuadraticModel {
        algebra::neg(self.as_operand())
    }
}

impl Neg for Variable {
    type Output = QuadraticModel;

    fn neg(self) -> QuadraticModel {
        algebra::neg(self.as_operand())
    }
}

impl Neg for &Variable {
    type Output = QuadraticModel;

    fn neg(self) -> QuadraticModel {
        algebra::neg(self.as_operand())
    }
}
