//!
//! Dense N×N matrix of capacities
//!
//! Both the capacity matrix and the residual matrix of a `FlowNetwork` are `Matrix`.
//! Entries are indexed by an ordered vertex pair `(u, v)`.
//!
use super::Capacity;
use itertools::Itertools;
use std::ops::{Index, IndexMut};

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Matrix {
    n: usize,
    cells: Vec<Capacity>,
}

impl Matrix {
    /// all-zero `n`×`n` matrix
    pub fn zeros(n: usize) -> Matrix {
        Matrix {
            n,
            cells: vec![0; n * n],
        }
    }
    /// number of rows (= number of columns)
    pub fn size(&self) -> usize {
        self.n
    }
    pub fn get(&self, u: usize, v: usize) -> Option<Capacity> {
        if u < self.n && v < self.n {
            Some(self.cells[u * self.n + v])
        } else {
            None
        }
    }
    pub fn row(&self, u: usize) -> &[Capacity] {
        &self.cells[u * self.n..(u + 1) * self.n]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Capacity]> + '_ {
        // chunks(0) panics, and a zero sized matrix has no rows anyway
        self.cells.chunks(self.n.max(1))
    }
    ///
    /// Positive entries `(u, v, value)` in row-major order
    ///
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, usize, Capacity)> + '_ {
        (0..self.n)
            .cartesian_product(0..self.n)
            .map(move |(u, v)| (u, v, self[(u, v)]))
            .filter(|&(_, _, c)| c > 0)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Capacity;
    fn index(&self, (u, v): (usize, usize)) -> &Capacity {
        assert!(u < self.n && v < self.n, "({}, {}) is out of {}x{}", u, v, self.n, self.n);
        &self.cells[u * self.n + v]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (u, v): (usize, usize)) -> &mut Capacity {
        assert!(u < self.n && v < self.n, "({}, {}) is out of {}x{}", u, v, self.n, self.n);
        &mut self.cells[u * self.n + v]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
