//! Read-back inspection of NetCDF fixture files
//!
//! Collects the dimensions and variables of an open file into plain structs so
//! a generated fixture can be checked without going through the NetCDF API.

use crate::errors::{NcGenError, Result};
use netcdf::{AttributeValue, File};
use std::collections::BTreeMap;

/// Information about a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
    pub is_unlimited: bool,
}

/// Structured metadata for a variable
#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub name: String,
    pub dimensions: Vec<String>,
    pub shape: Vec<usize>,
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl VariableInfo {
    pub fn total_elements(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Dimensions and variables of a fixture file
#[derive(Debug, Clone)]
pub struct FixtureSummary {
    pub dimensions: Vec<DimensionInfo>,
    pub variables: Vec<VariableInfo>,
}

impl FixtureSummary {
    pub fn dimension(&self, name: &str) -> Option<&DimensionInfo> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Variables that are not coordinate variables of a same-named dimension
    pub fn data_variables(&self) -> Vec<&VariableInfo> {
        self.variables
            .iter()
            .filter(|v| self.dimension(&v.name).is_none())
            .collect()
    }
}

/// Summarize every dimension and variable in `file`.
pub fn inspect_fixture(file: &File) -> Result<FixtureSummary> {
    let dimensions = file
        .dimensions()
        .map(|d| DimensionInfo {
            name: d.name().to_string(),
            length: d.len(),
            is_unlimited: d.is_unlimited(),
        })
        .collect();

    let mut variables = Vec::new();
    for var in file.variables() {
        let mut attributes = BTreeMap::new();
        for attr in var.attributes() {
            attributes.insert(attr.name().to_string(), attr.value()?);
        }

        variables.push(VariableInfo {
            name: var.name().to_string(),
            dimensions: var
                .dimensions()
                .iter()
                .map(|d| d.name().to_string())
                .collect(),
            shape: var.dimensions().iter().map(|d| d.len()).collect(),
            attributes,
        });
    }

    Ok(FixtureSummary {
        dimensions,
        variables,
    })
}

/// Read a `f32` variable in full.
pub fn read_f32_values(file: &File, var_name: &str) -> Result<Vec<f32>> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| NcGenError::VariableNotFound {
            var: var_name.to_string(),
        })?;
    Ok(var.get_values::<f32, _>(..)?)
}
