use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::types::Coord;
use crate::num::CoordNum;

impl<T: CoordNum> Add for Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn add(self, rhs: Coord<T>) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: CoordNum> Add<&Coord<T>> for &Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn add(self, rhs: &Coord<T>) -> Self::Output {
        *self + *rhs
    }
}

impl<T: CoordNum> Sub for Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn sub(self, rhs: Coord<T>) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: CoordNum> Sub<&Coord<T>> for &Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn sub(self, rhs: &Coord<T>) -> Self::Output {
        *self - *rhs
    }
}

impl<T: CoordNum> AddAssign for Coord<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Coord<T>) {
        self.add_in_place(rhs);
    }
}

impl<T: CoordNum> SubAssign for Coord<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord<T>) {
        self.sub_in_place(rhs);
    }
}

impl<T: CoordNum + Neg<Output = T>> Neg for Coord<T> {
    type Output = Coord<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}

impl<T: CoordNum> Coord<T> {
    /// `self += rhs`, returning `self` so calls can be chained.
    #[inline]
    pub fn add_in_place(&mut self, rhs: Coord<T>) -> &mut Self {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self
    }

    /// `self -= rhs`, returning `self` so calls can be chained.
    #[inline]
    pub fn sub_in_place(&mut self, rhs: Coord<T>) -> &mut Self {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self
    }
}
