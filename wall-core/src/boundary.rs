use crate::grid::GridSpec;

/// Which ambient a convective face exchanges heat with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ambient {
    /// Row 0 side of the wall.
    Exterior,
    /// Row `n_rows - 1` side of the wall.
    Interior,
}

/// Where the value of one stencil neighbour comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The neighbouring node of the current slice.
    Real,
    /// The node's own value: zero gradient, no heat crosses the face.
    Mirror,
    /// `(1 - teta) * u + teta * t_ambient`.
    Convective(Ambient),
}

/// Source of each of the four neighbours. North is `i - 1`, east is `j + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours {
    pub north: Source,
    pub south: Source,
    pub east: Source,
    pub west: Source,
}

/// The nine boundary regimes of a rectangular wall with convective
/// horizontal faces and adiabatic vertical faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    ExteriorWestCorner,
    WestEdge,
    InteriorWestCorner,
    InteriorFace,
    InteriorEastCorner,
    EastEdge,
    ExteriorEastCorner,
    ExteriorFace,
    Bulk,
}

impl Regime {
    pub const ALL: [Regime; 9] = [
        Regime::ExteriorWestCorner,
        Regime::WestEdge,
        Regime::InteriorWestCorner,
        Regime::InteriorFace,
        Regime::InteriorEastCorner,
        Regime::EastEdge,
        Regime::ExteriorEastCorner,
        Regime::ExteriorFace,
        Regime::Bulk,
    ];

    /// Classify node `(i, j)` of an `n_rows x n_cols` grid.
    ///
    /// Both dimensions must be at least 2, which `GridSpec` guarantees.
    pub fn classify(i: usize, j: usize, n_rows: usize, n_cols: usize) -> Regime {
        debug_assert!(i < n_rows && j < n_cols, "node ({i},{j}) outside grid");

        let top = i == 0;
        let bottom = i == n_rows - 1;
        let west = j == 0;
        let east = j == n_cols - 1;

        match (top, bottom, west, east) {
            (true, _, true, _) => Regime::ExteriorWestCorner,
            (true, _, _, true) => Regime::ExteriorEastCorner,
            (true, _, _, _) => Regime::ExteriorFace,
            (_, true, true, _) => Regime::InteriorWestCorner,
            (_, true, _, true) => Regime::InteriorEastCorner,
            (_, true, _, _) => Regime::InteriorFace,
            (_, _, true, _) => Regime::WestEdge,
            (_, _, _, true) => Regime::EastEdge,
            _ => Regime::Bulk,
        }
    }

    /// Regime number, 1 to 9, counted clockwise from the exterior west corner
    /// with the bulk last.
    pub fn number(self) -> u8 {
        match self {
            Regime::ExteriorWestCorner => 1,
            Regime::WestEdge => 2,
            Regime::InteriorWestCorner => 3,
            Regime::InteriorFace => 4,
            Regime::InteriorEastCorner => 5,
            Regime::EastEdge => 6,
            Regime::ExteriorEastCorner => 7,
            Regime::ExteriorFace => 8,
            Regime::Bulk => 9,
        }
    }

    pub fn neighbours(self) -> Neighbours {
        use Source::{Convective, Mirror, Real};

        let exterior = Convective(Ambient::Exterior);
        let interior = Convective(Ambient::Interior);

        let (north, south, east, west) = match self {
            Regime::ExteriorWestCorner => (exterior, Real, Real, Mirror),
            Regime::WestEdge => (Real, Real, Real, Mirror),
            Regime::InteriorWestCorner => (Real, interior, Real, Mirror),
            Regime::InteriorFace => (Real, interior, Real, Real),
            Regime::InteriorEastCorner => (Real, interior, Mirror, Real),
            Regime::EastEdge => (Real, Real, Mirror, Real),
            Regime::ExteriorEastCorner => (exterior, Real, Mirror, Real),
            Regime::ExteriorFace => (exterior, Real, Real, Real),
            Regime::Bulk => (Real, Real, Real, Real),
        };

        Neighbours {
            north,
            south,
            east,
            west,
        }
    }
}

/// Centre value and the four resolved neighbour values of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    pub centre: f64,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Stencil {
    /// Discrete Laplacian times `delta_xy²`.
    pub fn laplacian(&self) -> f64 {
        self.north + self.south + self.east + self.west - 4.0 * self.centre
    }
}

/// Robin substitution for a node of value `u` facing `ambient`.
pub fn convective(spec: &GridSpec, ambient: Ambient, u: f64) -> f64 {
    let (teta, t) = match ambient {
        Ambient::Exterior => (spec.teta_ext(), spec.t_ext()),
        Ambient::Interior => (spec.teta_int(), spec.t_int()),
    };
    (1.0 - teta) * u + teta * t
}

/// Resolve the stencil of node `(i, j)` against `slice`, a row-major
/// `n_rows x n_cols` temperature slice.
pub fn resolve_stencil(spec: &GridSpec, slice: &[f64], i: usize, j: usize) -> Stencil {
    let n_cols = spec.n_cols();
    let idx = i * n_cols + j;
    let centre = slice[idx];

    // Neighbour indices are only dereferenced for `Source::Real`, which the
    // regime table never assigns across a grid edge.
    let value = |source: Source, neighbour: usize| -> f64 {
        match source {
            Source::Real => slice[neighbour],
            Source::Mirror => centre,
            Source::Convective(ambient) => convective(spec, ambient, centre),
        }
    };

    let sources = Regime::classify(i, j, spec.n_rows(), n_cols).neighbours();

    Stencil {
        centre,
        north: value(sources.north, idx.wrapping_sub(n_cols)),
        south: value(sources.south, idx + n_cols),
        east: value(sources.east, idx + 1),
        west: value(sources.west, idx.wrapping_sub(1)),
    }
}
