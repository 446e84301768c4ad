//! Dense incidence tables with a uniform per-element degree.
//!
//! Regular polytopes have the same number of edges at every vertex and the
//! same number of neighbours around every face. Both searches index their
//! tables with a fixed stride taken from element 0; `UniformIncidence::from_lists`
//! checks that every element really has that degree before the stride is used.

/// Flat `n × degree` table; row `i` lists the elements incident to element `i`.
#[derive(Clone, Debug)]
pub struct UniformIncidence {
    degree: usize,
    table: Vec<usize>,
}

impl UniformIncidence {
    /// Pack per-element lists into a strided table.
    ///
    /// Panics if any list length differs from the first one: a non-uniform
    /// degree means the input is not a regular polytope (or edge discovery
    /// went wrong), and continuing would silently build a wrong mesh.
    pub fn from_lists(lists: &[Vec<usize>], what: &str) -> Self {
        let degree = lists.first().map_or(0, Vec::len);
        let mut table = Vec::with_capacity(lists.len() * degree);
        for (i, list) in lists.iter().enumerate() {
            assert_eq!(
                list.len(),
                degree,
                "{what}: element {i} has degree {} but element 0 has degree {degree}",
                list.len()
            );
            table.extend_from_slice(list);
        }
        assert_eq!(
            table.len(),
            lists.len() * degree,
            "{what}: incidence table size mismatch"
        );
        Self { degree, table }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Row `i` of the table.
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.table[i * self.degree..(i + 1) * self.degree]
    }
}
