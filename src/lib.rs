/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
//! Exact rational numbers over fixed-width integers.
//!
//! A [`Rational`] is either a ratio of two `i64`s or the undefined value
//! (written `0/0`), which is what arithmetic yields when it has nothing
//! meaningful to return, e.g. after dividing by zero.

pub mod error;
pub mod rational;
pub mod util;

pub use error::RationalError;
pub use rational::Rational;
