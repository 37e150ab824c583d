use bevy::prelude::*;

/// An inclusive axis-aligned box of block positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct BlockRegion {
    pub min: IVec3,
    pub max: IVec3,
}

impl BlockRegion {
    pub fn from_min_max(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    pub fn from_min_and_size(min: IVec3, size: IVec3) -> Self {
        Self {
            min,
            max: min + size - IVec3::ONE,
        }
    }

    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Geometric center of the occupied volume.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max).as_vec3() * 0.5 + Vec3::splat(0.5)
    }

    /// The center block of the footprint at the top layer. Well-defined for
    /// odd x/z sizes, which the surround-shape predicates guarantee.
    pub fn top_center_block(&self) -> IVec3 {
        let size = self.size();
        IVec3::new(
            self.min.x + (size.x - 1) / 2,
            self.max.y,
            self.min.z + (size.z - 1) / 2,
        )
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }

    /// Iterates every block position in the region.
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| {
            (min.z..=max.z)
                .flat_map(move |z| (min.x..=max.x).map(move |x| IVec3::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_center() {
        let region = BlockRegion::from_min_and_size(IVec3::new(1, 0, -2), IVec3::new(3, 4, 5));
        assert_eq!(region.max, IVec3::new(3, 3, 2));
        assert_eq!(region.size(), IVec3::new(3, 4, 5));
        assert_eq!(region.center(), Vec3::new(2.5, 2.0, 0.5));
    }

    #[test]
    fn test_top_center_block_odd_footprint() {
        let region = BlockRegion::from_min_and_size(IVec3::ZERO, IVec3::new(5, 3, 3));
        assert_eq!(region.top_center_block(), IVec3::new(2, 2, 1));
    }

    #[test]
    fn test_iter_covers_volume() {
        let region = BlockRegion::from_min_and_size(IVec3::ZERO, IVec3::new(3, 3, 3));
        assert_eq!(region.iter().count(), 27);
        assert!(region.iter().all(|p| region.contains(p)));
    }
}
