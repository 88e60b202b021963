// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle telemetry snapshot and derived battery figures.

use crate::error::DomainError;
use crate::ranking::LOW_CHARGE_THRESHOLD;
use serde::{Deserialize, Serialize};

/// State of charge above which the battery is considered well charged.
pub const HIGH_CHARGE_THRESHOLD: u8 = 80;

/// Severity of a maintenance alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
}

/// A maintenance notice raised from telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceAlert {
    pub id: u32,
    pub alert: String,
    pub severity: Severity,
}

impl MaintenanceAlert {
    /// Creates a new `MaintenanceAlert`.
    #[must_use]
    pub fn new(id: u32, alert: &str, severity: Severity) -> Self {
        Self {
            id,
            alert: alert.to_string(),
            severity,
        }
    }
}

/// Coarse state-of-charge band shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeBand {
    /// Above 80%.
    High,
    /// Between 31% and 80%.
    Medium,
    /// 30% or below.
    Low,
}

/// A telemetry snapshot of the user's vehicle.
///
/// Deserialization goes through [`EvStatus::new`], so a snapshot read from
/// the wire is held to the same percentage range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EvStatusRecord")]
pub struct EvStatus {
    /// State of charge, 0 to 100.
    battery_percentage: u8,
    pub estimated_range_km: u32,
    /// Battery state of health, percent.
    pub battery_health: u8,
    pub battery_temp_c: i16,
    /// Energy consumption relative to ideal (1.15 means 15% higher).
    pub km_deviation: f64,
    pub is_fast_charging: bool,
    pub maintenance_alerts: Vec<MaintenanceAlert>,
}

/// Unchecked wire shape of [`EvStatus`].
#[derive(Deserialize)]
struct EvStatusRecord {
    battery_percentage: u8,
    estimated_range_km: u32,
    battery_health: u8,
    battery_temp_c: i16,
    km_deviation: f64,
    #[serde(default)]
    is_fast_charging: bool,
    #[serde(default)]
    maintenance_alerts: Vec<MaintenanceAlert>,
}

impl TryFrom<EvStatusRecord> for EvStatus {
    type Error = DomainError;

    fn try_from(record: EvStatusRecord) -> Result<Self, Self::Error> {
        let mut status: Self = Self::new(
            record.battery_percentage,
            record.estimated_range_km,
            record.battery_health,
            record.battery_temp_c,
            record.km_deviation,
        )?;
        status.is_fast_charging = record.is_fast_charging;
        Ok(status.with_alerts(record.maintenance_alerts))
    }
}

impl EvStatus {
    /// Creates a new `EvStatus`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBatteryPercentage` if `battery_percentage`
    /// is above 100.
    pub fn new(
        battery_percentage: u8,
        estimated_range_km: u32,
        battery_health: u8,
        battery_temp_c: i16,
        km_deviation: f64,
    ) -> Result<Self, DomainError> {
        if battery_percentage > 100 {
            return Err(DomainError::InvalidBatteryPercentage(battery_percentage));
        }
        Ok(Self {
            battery_percentage,
            estimated_range_km,
            battery_health,
            battery_temp_c,
            km_deviation,
            is_fast_charging: false,
            maintenance_alerts: Vec::new(),
        })
    }

    /// Attaches maintenance alerts.
    #[must_use]
    pub fn with_alerts(mut self, alerts: Vec<MaintenanceAlert>) -> Self {
        self.maintenance_alerts = alerts;
        self
    }

    /// State of charge, percent.
    #[must_use]
    pub const fn battery_percentage(&self) -> u8 {
        self.battery_percentage
    }

    /// Depth of discharge: `100 - SoC`.
    #[must_use]
    pub const fn depth_of_discharge(&self) -> u8 {
        100_u8.saturating_sub(self.battery_percentage)
    }

    #[must_use]
    pub const fn charge_band(&self) -> ChargeBand {
        if self.battery_percentage > HIGH_CHARGE_THRESHOLD {
            ChargeBand::High
        } else if self.battery_percentage <= LOW_CHARGE_THRESHOLD {
            ChargeBand::Low
        } else {
            ChargeBand::Medium
        }
    }

    /// Returns true if the state of charge is at or below `threshold`.
    #[must_use]
    pub const fn is_low_charge(&self, threshold: u8) -> bool {
        self.battery_percentage <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(pct: u8) -> EvStatus {
        EvStatus::new(pct, 88, 92, 45, 1.15).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_depth_of_discharge() {
        assert_eq!(status(25).depth_of_discharge(), 75);
        assert_eq!(status(100).depth_of_discharge(), 0);
        assert_eq!(status(0).depth_of_discharge(), 100);
    }

    #[test]
    fn test_charge_band_boundaries() {
        assert_eq!(status(81).charge_band(), ChargeBand::High);
        assert_eq!(status(80).charge_band(), ChargeBand::Medium);
        assert_eq!(status(31).charge_band(), ChargeBand::Medium);
        assert_eq!(status(30).charge_band(), ChargeBand::Low);
    }

    #[test]
    fn test_rejects_percentage_over_100() {
        assert_eq!(
            EvStatus::new(101, 0, 0, 0, 1.0),
            Err(DomainError::InvalidBatteryPercentage(101))
        );
    }

    #[test]
    fn test_deserialize_rejects_percentage_over_100() {
        let json = r#"{"battery_percentage":150,"estimated_range_km":88,"battery_health":92,"battery_temp_c":45,"km_deviation":1.15,"is_fast_charging":false,"maintenance_alerts":[]}"#;

        let result = serde_json::from_str::<EvStatus>(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_keeps_snapshot_fields() {
        let mut original = status(25).with_alerts(vec![MaintenanceAlert::new(
            1,
            "Check tyres",
            Severity::Low,
        )]);
        original.is_fast_charging = true;
        let json = serde_json::to_string(&original).unwrap_or_default();

        let decoded = serde_json::from_str::<EvStatus>(&json).map_err(|e| e.to_string());

        assert_eq!(decoded, Ok(original));
    }

    #[test]
    fn test_low_charge_uses_threshold_inclusively() {
        assert!(status(30).is_low_charge(LOW_CHARGE_THRESHOLD));
        assert!(!status(31).is_low_charge(LOW_CHARGE_THRESHOLD));
    }
}
