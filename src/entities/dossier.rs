//! Style dossier - every record the PLM page shows for one style

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entity::{self, Entity};
use crate::core::identity::EntityId;
use crate::costing::{self, CostBreakdown, MarkerError, MarkerUtilization};

use super::asset::Asset;
use super::bom::BomLine;
use super::change::Changes;
use super::decision::Decision;
use super::marker::MarkerConfig;
use super::operation::Operation;
use super::overhead::OverheadConfig;
use super::packaging::PackagingLine;
use super::sourcing::{Quote, Rfq};
use super::specs::Specs;
use super::style::{KpiSeries, Style};
use super::validation::Validation;

/// All records of one style, owned by the session editing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDossier {
    pub style: Style,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kpis: Vec<KpiSeries>,

    #[serde(default)]
    pub bom: Vec<BomLine>,

    #[serde(default)]
    pub operations: Vec<Operation>,

    #[serde(default)]
    pub overhead: OverheadConfig,

    #[serde(default)]
    pub packaging: Vec<PackagingLine>,

    #[serde(default)]
    pub marker: MarkerConfig,

    #[serde(default)]
    pub specs: Specs,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<Decision>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rfqs: Vec<Rfq>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quotes: Vec<Quote>,

    #[serde(default)]
    pub changes: Changes,

    #[serde(default)]
    pub validation: Validation,
}

/// Errors raised when editing a dossier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DossierError {
    #[error("no {kind} with id {id} in this style")]
    NotFound { kind: &'static str, id: EntityId },

    #[error("{kind} id {id} is already used in this style")]
    DuplicateId { kind: &'static str, id: EntityId },
}

impl StyleDossier {
    /// An empty dossier for a new style
    pub fn new(style: Style) -> Self {
        Self {
            style,
            kpis: Vec::new(),
            bom: Vec::new(),
            operations: Vec::new(),
            overhead: OverheadConfig::default(),
            packaging: Vec::new(),
            marker: MarkerConfig::default(),
            specs: Specs::default(),
            assets: Vec::new(),
            decisions: Vec::new(),
            rfqs: Vec::new(),
            quotes: Vec::new(),
            changes: Changes::default(),
            validation: Validation::default(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.style.id
    }

    /// Cost breakdown for the current inputs, recomputed on every call
    pub fn costing(&self) -> CostBreakdown {
        costing::compute_costing(&self.bom, &self.operations, &self.overhead, &self.packaging)
    }

    pub fn marker_utilization(&self) -> Result<MarkerUtilization, MarkerError> {
        costing::marker_utilization(&self.marker)
    }

    pub fn add_bom_line(&mut self, line: BomLine) -> Result<EntityId, DossierError> {
        push_unique(&mut self.bom, line)
    }

    pub fn add_operation(&mut self, op: Operation) -> Result<EntityId, DossierError> {
        push_unique(&mut self.operations, op)
    }

    pub fn add_packaging(&mut self, line: PackagingLine) -> Result<EntityId, DossierError> {
        push_unique(&mut self.packaging, line)
    }

    pub fn add_decision(&mut self, decision: Decision) -> Result<EntityId, DossierError> {
        push_unique(&mut self.decisions, decision)
    }

    pub fn bom_line_mut(&mut self, id: &EntityId) -> Result<&mut BomLine, DossierError> {
        lookup_mut(&mut self.bom, id)
    }

    pub fn operation_mut(&mut self, id: &EntityId) -> Result<&mut Operation, DossierError> {
        lookup_mut(&mut self.operations, id)
    }

    pub fn packaging_mut(&mut self, id: &EntityId) -> Result<&mut PackagingLine, DossierError> {
        lookup_mut(&mut self.packaging, id)
    }
}

fn push_unique<T: Entity>(items: &mut Vec<T>, item: T) -> Result<EntityId, DossierError> {
    let id = item.id().clone();
    if entity::find(items, &id).is_some() {
        return Err(DossierError::DuplicateId { kind: T::KIND, id });
    }
    items.push(item);
    Ok(id)
}

fn lookup_mut<'a, T: Entity>(items: &'a mut [T], id: &EntityId) -> Result<&'a mut T, DossierError> {
    entity::find_mut(items, id).ok_or_else(|| DossierError::NotFound {
        kind: T::KIND,
        id: id.clone(),
    })
}
