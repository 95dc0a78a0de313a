//! Generic MNA matrix assembly and dense LU solving.

use num_traits::{One, Zero};

use crate::elements::Netlist;
use crate::error::{PhasorError, Result};
use crate::value::Scalar;

use super::PIVOT_TOLERANCE;

/// MNA matrix system Ax = z over one numeric domain.
///
/// The same storage and algorithms serve both domains: `T = f64` for DC
/// and `T = Complex64` for AC, with pivoting done on [`Scalar::modulus`].
#[derive(Debug)]
pub struct MnaMatrix<T: Scalar> {
    /// System matrix A (row-major)
    pub a: Vec<T>,
    /// Source vector z
    pub z: Vec<T>,
    /// Solution vector x
    pub x: Vec<T>,
    /// Matrix dimension (nodes + sources)
    pub size: usize,
    /// Number of node-voltage unknowns (rows 0..num_nodes)
    pub num_nodes: usize,
    /// LU decomposition of A
    lu: Vec<T>,
    /// Pivot indices for the LU decomposition
    pivots: Vec<usize>,
}

impl<T: Scalar> MnaMatrix<T> {
    /// Create a zeroed system for `num_nodes` voltage unknowns and
    /// `num_sources` branch-current unknowns.
    pub fn new(num_nodes: usize, num_sources: usize) -> Self {
        let size = num_nodes + num_sources;
        Self {
            a: vec![T::zero(); size * size],
            z: vec![T::zero(); size],
            x: vec![T::zero(); size],
            size,
            num_nodes,
            lu: vec![T::zero(); size * size],
            pivots: vec![0; size],
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> T {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: T) {
        self.a[row * self.size + col] += value;
    }

    /// Stamp a conductance between two nodes (`None` = ground).
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: T) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp the k-th ideal voltage source between two nodes.
    ///
    /// The branch equation enforces V[n2] − V[n1] = E, and the branch
    /// current unknown is the current flowing out of n2 into the source.
    /// With `V1 0 1 5` across `R1 0 1 10`, node 1 solves to +5 V and the
    /// branch current to −0.5 A.
    pub fn stamp_voltage_source(
        &mut self,
        n1: Option<usize>,
        n2: Option<usize>,
        k: usize,
        voltage: T,
    ) {
        let br = self.num_nodes + k;
        if let Some(i) = n1 {
            self.add(i, br, -T::one());
            self.add(br, i, -T::one());
        }
        if let Some(j) = n2 {
            self.add(j, br, T::one());
            self.add(br, j, T::one());
        }
        self.z[br] = voltage;
    }

    /// Perform LU decomposition with partial pivoting.
    pub fn factor(&mut self) -> Result<()> {
        let n = self.size;
        self.lu.copy_from_slice(&self.a);

        for i in 0..n {
            self.pivots[i] = i;
        }

        for k in 0..n {
            // Find pivot
            let mut max_val = self.lu[k * n + k].modulus();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = self.lu[i * n + k].modulus();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < PIVOT_TOLERANCE {
                return Err(PhasorError::SingularSystem);
            }

            // Swap rows if needed
            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    let tmp = self.lu[k * n + j];
                    self.lu[k * n + j] = self.lu[max_row * n + j];
                    self.lu[max_row * n + j] = tmp;
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let sub = factor * self.lu[k * n + j];
                    self.lu[i * n + j] -= sub;
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    pub fn solve(&mut self) -> Result<()> {
        let n = self.size;

        // Apply pivot permutation to z
        let b = self.z.clone();
        for i in 0..n {
            self.x[i] = b[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                let sub = self.lu[i * n + j] * self.x[j];
                self.x[i] -= sub;
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let sub = self.lu[i * n + j] * self.x[j];
                self.x[i] -= sub;
            }
            let diag = self.lu[i * n + i];
            if diag.modulus() < PIVOT_TOLERANCE {
                return Err(PhasorError::SingularSystem);
            }
            self.x[i] /= diag;
        }

        Ok(())
    }

    /// Get the solved voltage at an unknown index (`None` = ground = 0).
    pub fn voltage(&self, node: Option<usize>) -> T {
        match node {
            Some(i) => self.x[i],
            None => T::zero(),
        }
    }

    /// Get the solved branch current of the k-th voltage source.
    pub fn source_current(&self, k: usize) -> T {
        self.x[self.num_nodes + k]
    }
}

/// Assemble the MNA system for a netlist.
///
/// N is the highest node index referenced anywhere; M is the number of
/// voltage sources in parse order. Fails with [`PhasorError::EmptyNetlist`]
/// before any indexing when there are no elements.
pub fn assemble<T: Scalar>(netlist: &Netlist<T>) -> Result<MnaMatrix<T>> {
    if netlist.is_empty() {
        return Err(PhasorError::EmptyNetlist);
    }

    let num_nodes = netlist.num_nodes();
    let num_sources = netlist.sources.len();
    let mut matrix = MnaMatrix::new(num_nodes, num_sources);

    for r in &netlist.resistors {
        matrix.stamp_conductance(
            r.nodes[0].unknown_index(),
            r.nodes[1].unknown_index(),
            T::from_real(r.conductance()),
        );
    }

    for (k, v) in netlist.sources.iter().enumerate() {
        matrix.stamp_voltage_source(
            v.nodes[0].unknown_index(),
            v.nodes[1].unknown_index(),
            k,
            v.value,
        );
    }

    Ok(matrix)
}
