use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;

pub const TOOLTIP_STATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStateJsonContractV1 {
    pub schema_version: u32,
    pub tooltip: TooltipState,
}

impl TooltipState {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TooltipStateJsonContractV1 {
            schema_version: TOOLTIP_STATE_JSON_SCHEMA_V1,
            tooltip: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize tooltip contract v1: {e}"))
        })
    }

    /// Accepts either a bare `TooltipState` or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(state) = serde_json::from_str::<TooltipState>(input) {
            return Ok(state);
        }
        let payload: TooltipStateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse tooltip json payload: {e}"))
        })?;
        if payload.schema_version != TOOLTIP_STATE_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported tooltip schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.tooltip)
    }
}
