//! The [`Patch`] spatial unit and its validating builder.

use crate::{TerrainError, Vegetation};
use duff_core::{ElementStock, LitterPool, LitterStore, PatchId};

/// The smallest spatial simulation unit.
///
/// A patch carries a planar area, a vegetation classification derived
/// from its dominant canopy stratum, four litter pools (each a
/// carbon/nitrogen density), and a root-zone depth. The redistribution
/// pass mutates the litter densities in place and, for non-vegetated
/// patches, writes the family's area-weighted mean root-zone depth into
/// [`family_root_depth`](Patch::family_root_depth) for the downstream
/// mineralization process.
///
/// Construct through [`Patch::builder`], which validates every field.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    id: PatchId,
    area: f64,
    vegetation: Vegetation,
    litter: LitterStore,
    root_depth: f64,
    family_root_depth: Option<f64>,
}

impl Patch {
    /// Start building a patch with the given identifier.
    pub fn builder(id: PatchId) -> PatchBuilder {
        PatchBuilder {
            id,
            area: 1.0,
            vegetation: Vegetation::default(),
            litter: LitterStore::EMPTY,
            root_depth: 0.0,
        }
    }

    /// Unique identifier within the zone.
    pub fn id(&self) -> PatchId {
        self.id
    }

    /// Planar area, strictly positive.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Cover class of the dominant canopy stratum.
    pub fn vegetation(&self) -> Vegetation {
        self.vegetation
    }

    /// `true` if the patch has any vegetated cover.
    pub fn is_vegetated(&self) -> bool {
        self.vegetation.is_vegetated()
    }

    /// Litter densities, one carbon/nitrogen pair per pool.
    pub fn litter(&self) -> &LitterStore {
        &self.litter
    }

    /// Mutable access to the litter densities.
    pub fn litter_mut(&mut self) -> &mut LitterStore {
        &mut self.litter
    }

    /// Root-zone depth of this patch.
    pub fn root_depth(&self) -> f64 {
        self.root_depth
    }

    /// Family mean root-zone depth, present on non-vegetated patches
    /// after a redistribution pass. Consumed by mineralization.
    pub fn family_root_depth(&self) -> Option<f64> {
        self.family_root_depth
    }

    /// Record the family's mean root-zone depth on this patch.
    pub fn inherit_family_root_depth(&mut self, depth: f64) {
        self.family_root_depth = Some(depth);
    }
}

/// Validating builder for [`Patch`].
///
/// Defaults: area 1.0, grass cover, empty litter store, zero root
/// depth. [`build()`](PatchBuilder::build) rejects non-finite or
/// non-positive areas, negative or non-finite densities, and negative
/// root depths.
pub struct PatchBuilder {
    id: PatchId,
    area: f64,
    vegetation: Vegetation,
    litter: LitterStore,
    root_depth: f64,
}

impl PatchBuilder {
    /// Set the planar area. Must be finite and strictly positive.
    pub fn area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// Set the vegetation cover class.
    pub fn vegetation(mut self, vegetation: Vegetation) -> Self {
        self.vegetation = vegetation;
        self
    }

    /// Set one pool's carbon/nitrogen density.
    pub fn litter(mut self, pool: LitterPool, density: ElementStock) -> Self {
        self.litter[pool] = density;
        self
    }

    /// Set all four pool densities at once, in [`LitterPool::ALL`] order.
    pub fn litter_store(mut self, litter: LitterStore) -> Self {
        self.litter = litter;
        self
    }

    /// Set the root-zone depth. Must be finite and non-negative.
    pub fn root_depth(mut self, depth: f64) -> Self {
        self.root_depth = depth;
        self
    }

    /// Validate and build the patch.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the area is non-positive or non-finite, any
    /// litter density is negative or non-finite, or the root depth is
    /// negative or non-finite.
    pub fn build(self) -> Result<Patch, TerrainError> {
        if !self.area.is_finite() {
            return Err(TerrainError::NonFiniteValue {
                patch: self.id,
                field: "area",
                value: self.area,
            });
        }
        if self.area <= 0.0 {
            return Err(TerrainError::NonPositiveArea {
                patch: self.id,
                area: self.area,
            });
        }
        for (pool, density) in self.litter.iter() {
            if !density.is_finite() {
                return Err(TerrainError::NonFiniteValue {
                    patch: self.id,
                    field: "litter density",
                    value: if density.carbon.is_finite() {
                        density.nitrogen
                    } else {
                        density.carbon
                    },
                });
            }
            if density.carbon < 0.0 || density.nitrogen < 0.0 {
                return Err(TerrainError::NegativeDensity {
                    patch: self.id,
                    pool,
                    carbon: density.carbon,
                    nitrogen: density.nitrogen,
                });
            }
        }
        if !self.root_depth.is_finite() {
            return Err(TerrainError::NonFiniteValue {
                patch: self.id,
                field: "root depth",
                value: self.root_depth,
            });
        }
        if self.root_depth < 0.0 {
            return Err(TerrainError::NegativeRootDepth {
                patch: self.id,
                depth: self.root_depth,
            });
        }

        Ok(Patch {
            id: self.id,
            area: self.area,
            vegetation: self.vegetation,
            litter: self.litter,
            root_depth: self.root_depth,
            family_root_depth: None,
        })
    }
}
