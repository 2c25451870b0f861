//! Shared domain enums (status enumerations and hardware types)
//!
//! Three independent status dimensions coexist on the asset records:
//! ownership lifecycle ([`AssignmentStatus`]), physical possession
//! ([`LoanStatus`]) and license lifecycle ([`SoftwareStatus`]), plus the
//! per-join-record [`InventoryStatus`]. Each is a flat enumeration — the
//! backend enforces no transition graph, and any status may be written
//! over any other. The one cross-dimension rule lives in
//! [`AssignmentStatus::allows_active_loan`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HardwareType
// ---------------------------------------------------------------------------

/// Hardware category, used to split the unified hardware collection into
/// the per-type views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareType {
    Computer,
    AudioVideo,
    Video,
    Printer,
    Device,
}

impl HardwareType {
    /// Wire code stored in the hardware record's `type` field.
    pub fn as_code(&self) -> &'static str {
        match self {
            HardwareType::Computer => "computer",
            HardwareType::AudioVideo => "audio_video",
            HardwareType::Video => "video",
            HardwareType::Printer => "printer",
            HardwareType::Device => "device",
        }
    }
}

impl From<&str> for HardwareType {
    fn from(s: &str) -> Self {
        match s {
            "computer" => HardwareType::Computer,
            "audio_video" => HardwareType::AudioVideo,
            "video" => HardwareType::Video,
            "printer" => HardwareType::Printer,
            _ => HardwareType::Device,
        }
    }
}

impl std::fmt::Display for HardwareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HardwareType::Computer => "Computer",
            HardwareType::AudioVideo => "Audio/Video",
            HardwareType::Video => "Video",
            HardwareType::Printer => "Printer",
            HardwareType::Device => "Device",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AssignmentStatus
// ---------------------------------------------------------------------------

/// Hardware ownership-lifecycle status.
///
/// `Pending Removal` is the staging sentinel: records carrying it appear
/// in the pending-removals view until an operator approves the
/// irreversible DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    Assigned,
    #[serde(rename = "In Repair")]
    InRepair,
    Decommissioned,
    #[serde(rename = "Pending Removal")]
    PendingRemoval,
}

impl AssignmentStatus {
    /// All statuses offered by the edit form, in display order.
    /// `Pending Removal` is written by the staging action, not picked
    /// from the form.
    pub const SELECTABLE: [AssignmentStatus; 4] = [
        AssignmentStatus::InStock,
        AssignmentStatus::Assigned,
        AssignmentStatus::InRepair,
        AssignmentStatus::Decommissioned,
    ];

    /// Whether a record in this state may still carry an active loan.
    ///
    /// Decommissioned and Pending Removal hardware is out of circulation;
    /// writes that move a record into either state also clear the loan
    /// dimension (see `HardwareService::update_assignment`).
    pub fn allows_active_loan(&self) -> bool {
        !matches!(
            self,
            AssignmentStatus::Decommissioned | AssignmentStatus::PendingRemoval
        )
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssignmentStatus::InStock => "In Stock",
            AssignmentStatus::Assigned => "Assigned",
            AssignmentStatus::InRepair => "In Repair",
            AssignmentStatus::Decommissioned => "Decommissioned",
            AssignmentStatus::PendingRemoval => "Pending Removal",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// LoanStatus
// ---------------------------------------------------------------------------

/// Hardware physical-possession status, independent of [`AssignmentStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Available,
    #[serde(rename = "Loaned Out")]
    LoanedOut,
    #[serde(rename = "In Repair")]
    InRepair,
    #[serde(rename = "Returned to Stock")]
    ReturnedToStock,
}

impl LoanStatus {
    pub const SELECTABLE: [LoanStatus; 4] = [
        LoanStatus::Available,
        LoanStatus::LoanedOut,
        LoanStatus::InRepair,
        LoanStatus::ReturnedToStock,
    ];

    /// Only `Loaned Out` carries a borrower; every other status forces
    /// `loaned_to_employee_id` to null on write.
    pub fn requires_borrower(&self) -> bool {
        matches!(self, LoanStatus::LoanedOut)
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Available => "Available",
            LoanStatus::LoanedOut => "Loaned Out",
            LoanStatus::InRepair => "In Repair",
            LoanStatus::ReturnedToStock => "Returned to Stock",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// SoftwareStatus
// ---------------------------------------------------------------------------

/// Software license lifecycle status.
///
/// Purely descriptive: `expiration_date` is stored but never compared
/// against the current date, so no automatic Active → Expired transition
/// happens on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SoftwareStatus {
    #[default]
    Active,
    Expired,
    #[serde(rename = "Pending Renewal")]
    PendingRenewal,
    Unused,
    Decommissioned,
}

impl SoftwareStatus {
    pub const SELECTABLE: [SoftwareStatus; 5] = [
        SoftwareStatus::Active,
        SoftwareStatus::Expired,
        SoftwareStatus::PendingRenewal,
        SoftwareStatus::Unused,
        SoftwareStatus::Decommissioned,
    ];
}

impl std::fmt::Display for SoftwareStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SoftwareStatus::Active => "Active",
            SoftwareStatus::Expired => "Expired",
            SoftwareStatus::PendingRenewal => "Pending Renewal",
            SoftwareStatus::Unused => "Unused",
            SoftwareStatus::Decommissioned => "Decommissioned",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// InventoryStatus
// ---------------------------------------------------------------------------

/// Status of an inventory assignment join record (lowercase on the wire,
/// unlike the hardware statuses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    #[default]
    Assigned,
    Returned,
    Maintenance,
    Decommissioned,
}

impl InventoryStatus {
    pub const SELECTABLE: [InventoryStatus; 4] = [
        InventoryStatus::Assigned,
        InventoryStatus::Returned,
        InventoryStatus::Maintenance,
        InventoryStatus::Decommissioned,
    ];
}

impl std::fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InventoryStatus::Assigned => "assigned",
            InventoryStatus::Returned => "returned",
            InventoryStatus::Maintenance => "maintenance",
            InventoryStatus::Decommissioned => "decommissioned",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Strict parsing for form/CLI input
// ---------------------------------------------------------------------------
//
// Wire deserialization is lenient where the backend is (`HardwareType`
// falls back to `Device`); operator input is not. These reject unknown
// labels instead of guessing.

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(AssignmentStatus::InStock),
            "Assigned" => Ok(AssignmentStatus::Assigned),
            "In Repair" => Ok(AssignmentStatus::InRepair),
            "Decommissioned" => Ok(AssignmentStatus::Decommissioned),
            "Pending Removal" => Ok(AssignmentStatus::PendingRemoval),
            other => Err(format!("Unknown assignment status: {}", other)),
        }
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(LoanStatus::Available),
            "Loaned Out" => Ok(LoanStatus::LoanedOut),
            "In Repair" => Ok(LoanStatus::InRepair),
            "Returned to Stock" => Ok(LoanStatus::ReturnedToStock),
            other => Err(format!("Unknown loan status: {}", other)),
        }
    }
}

impl std::str::FromStr for SoftwareStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(SoftwareStatus::Active),
            "Expired" => Ok(SoftwareStatus::Expired),
            "Pending Renewal" => Ok(SoftwareStatus::PendingRenewal),
            "Unused" => Ok(SoftwareStatus::Unused),
            "Decommissioned" => Ok(SoftwareStatus::Decommissioned),
            other => Err(format!("Unknown software status: {}", other)),
        }
    }
}

impl std::str::FromStr for InventoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(InventoryStatus::Assigned),
            "returned" => Ok(InventoryStatus::Returned),
            "maintenance" => Ok(InventoryStatus::Maintenance),
            "decommissioned" => Ok(InventoryStatus::Decommissioned),
            other => Err(format!("Unknown inventory status: {}", other)),
        }
    }
}

impl std::str::FromStr for HardwareType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "computer" => Ok(HardwareType::Computer),
            "audio_video" => Ok(HardwareType::AudioVideo),
            "video" => Ok(HardwareType::Video),
            "printer" => Ok(HardwareType::Printer),
            "device" => Ok(HardwareType::Device),
            other => Err(format!("Unknown hardware type: {}", other)),
        }
    }
}
