//! Toric Moore neighbourhood.
//!
//! Every site of an X × Y torus has 8 neighbours: the Moore offsets
//! {-1, 0, +1}² \ {(0, 0)} taken mod X and mod Y. The order below is fixed and
//! the adjacency builder relies on it.

/// The 8 wrap-around Moore neighbours of (x, y) on an X × Y torus.
///
/// Order: (x−1, y−1), (x−1, y), (x−1, y+1), (x, y−1), (x, y+1), (x+1, y−1),
/// (x+1, y), (x+1, y+1), every coordinate reduced mod its extent.
///
/// When X ≤ 2 or Y ≤ 2 some of the returned coordinates coincide, and when
/// X == 1 or Y == 1 some equal (x, y) itself. They are returned unchanged.
pub fn toric_neighbors((x, y): (usize, usize), (nx, ny): (usize, usize)) -> [(usize, usize); 8] {
    debug_assert!(x < nx && y < ny);
    let xm = (x + nx - 1) % nx;
    let ym = (y + ny - 1) % ny;
    let xp = (x + 1) % nx;
    let yp = (y + 1) % ny;
    [
        (xm, ym),
        (xm, y),
        (xm, yp),
        (x, ym),
        (x, yp),
        (xp, ym),
        (xp, y),
        (xp, yp),
    ]
}
