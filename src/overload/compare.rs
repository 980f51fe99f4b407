//! Weight-vector comparison: the ambiguity lattice.
//!
//! Candidate signatures of equal arity are compared per argument position,
//! not by summed cost. The outcome is four-valued: a challenger can be
//! strictly better, strictly worse, tied everywhere, or better at some
//! positions and worse at others. Only a strict `Better` dethrones the
//! reigning champion; everything weaker either accumulates ambiguity or is
//! discarded.

use overpass_core::Weight;

/// Outcome of comparing a challenger's weight vector against the champion's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The challenger is at least as cheap everywhere and strictly cheaper
    /// somewhere.
    Better,
    /// The challenger is at least as expensive everywhere and strictly more
    /// expensive somewhere.
    Worse,
    /// The vectors are equal at every position.
    Equivalent,
    /// Each side wins at some position.
    Ambiguous,
}

/// Compare a challenger's per-argument weights against the champion's.
///
/// Both vectors cover the same positions. Zero-arity compares `Better` by
/// definition: a matching nullary candidate always dominates.
pub fn compare_weight_vectors(known: &[Weight], suggested: &[Weight]) -> Preference {
    debug_assert_eq!(known.len(), suggested.len());

    if known.is_empty() {
        return Preference::Better;
    }

    let mut better_witness = false;
    let mut worse_witness = false;
    for (known, suggested) in known.iter().zip(suggested) {
        if suggested < known {
            better_witness = true;
        } else if known < suggested {
            worse_witness = true;
        }
    }

    match (better_witness, worse_witness) {
        (false, false) => Preference::Equivalent,
        (true, false) => Preference::Better,
        (false, true) => Preference::Worse,
        (true, true) => Preference::Ambiguous,
    }
}
