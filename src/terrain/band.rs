//! Height bands and their classification

use serde::{Deserialize, Serialize};

use crate::scene::TextureSurface;

/// Material band of a terrain column, highest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Peak,
    Upper,
    Mid,
    Lower,
    Base,
}

impl Band {
    /// All bands in descending threshold order
    pub const ALL: [Band; 5] = [Band::Peak, Band::Upper, Band::Mid, Band::Lower, Band::Base];

    /// Fraction of max height a column must exceed to land in this band
    pub fn threshold_fraction(&self) -> f32 {
        match self {
            Band::Peak => 0.8,
            Band::Upper => 0.7,
            Band::Mid => 0.5,
            Band::Lower => 0.3,
            Band::Base => 0.0,
        }
    }

    /// Position in [`Band::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Surface texture drawn on columns of this band
    pub fn surface(&self) -> TextureSurface {
        match self {
            Band::Peak => TextureSurface::Stone,
            Band::Upper => TextureSurface::Dirt,
            Band::Mid => TextureSurface::Grass,
            Band::Lower => TextureSurface::Sand,
            Band::Base => TextureSurface::Dirt2,
        }
    }

    /// Classify a world height.
    ///
    /// Thresholds are checked from the top down and are strict, except
    /// Base which takes everything left over, including a height of 0.
    pub fn classify(world_height: f32, max_height: f32) -> Band {
        Band::ALL
            .into_iter()
            .find(|band| world_height > band.threshold_fraction() * max_height)
            .unwrap_or(Band::Base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let max = 10.0;
        assert_eq!(Band::classify(10.0, max), Band::Peak);
        assert_eq!(Band::classify(8.01, max), Band::Peak);
        assert_eq!(Band::classify(8.0, max), Band::Upper);
        assert_eq!(Band::classify(7.5, max), Band::Upper);
        assert_eq!(Band::classify(6.0, max), Band::Mid);
        assert_eq!(Band::classify(4.0, max), Band::Lower);
        assert_eq!(Band::classify(3.0, max), Band::Base);
        assert_eq!(Band::classify(0.5, max), Band::Base);
    }

    #[test]
    fn test_zero_height_is_base() {
        assert_eq!(Band::classify(0.0, 10.0), Band::Base);
        assert_eq!(Band::classify(0.0, 0.01), Band::Base);
    }

    #[test]
    fn test_monotonic() {
        let max = 7.0;
        let mut previous = Band::Base;
        for i in 0..=1000 {
            let h = i as f32 / 1000.0 * max;
            let band = Band::classify(h, max);
            // ALL is ordered highest first, so the index may only go down
            assert!(band.index() <= previous.index(), "h={} gave {:?} after {:?}", h, band, previous);
            previous = band;
        }
        assert_eq!(previous, Band::Peak);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, band) in Band::ALL.iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }

    #[test]
    fn test_surfaces_distinct() {
        let surfaces: std::collections::HashSet<_> = Band::ALL.iter().map(Band::surface).collect();
        assert_eq!(surfaces.len(), 5);
    }
}
