//! Dashboard overview data.
//!
//! All figures are fixed sample data; nothing here is computed from real
//! transfers.

pub mod chart;

/// Headline metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

/// Monthly transfer speed sample (MB/s).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformancePoint {
    pub month: &'static str,
    pub speed: f64,
    pub avg: f64,
}

/// Share of transferred data per provider, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformShare {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStatus {
    Completed,
    InProgress,
    Failed,
}

impl TransferStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentTransfer {
    pub file_name: &'static str,
    pub source: &'static str,
    pub destination: &'static str,
    pub size: &'static str,
    pub status: TransferStatus,
    pub date: &'static str,
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard {
        value: "47",
        label: "Total Transfers Completed",
        caption: "All time successful transfers",
    },
    StatCard {
        value: "3",
        label: "Active Transfer Sessions",
        caption: "Currently running transfers",
    },
    StatCard {
        value: "$12.50",
        label: "Total Cost Spent",
        caption: "Cumulative cost of transfers",
    },
    StatCard {
        value: "125 GB",
        label: "Storage Transferred",
        caption: "Total data moved across clouds",
    },
];

pub const TRANSFER_PERFORMANCE: &[PerformancePoint] = &[
    PerformancePoint { month: "Jan", speed: 120.0, avg: 115.0 },
    PerformancePoint { month: "Feb", speed: 150.0, avg: 130.0 },
    PerformancePoint { month: "Mar", speed: 130.0, avg: 125.0 },
    PerformancePoint { month: "Apr", speed: 180.0, avg: 150.0 },
    PerformancePoint { month: "May", speed: 160.0, avg: 155.0 },
    PerformancePoint { month: "Jun", speed: 200.0, avg: 170.0 },
    PerformancePoint { month: "Jul", speed: 190.0, avg: 180.0 },
];

pub const PLATFORM_USAGE: &[PlatformShare] = &[
    PlatformShare { name: "Google Drive", value: 45.0, color: "#4285F4" },
    PlatformShare { name: "OneDrive", value: 25.0, color: "#0078D4" },
    PlatformShare { name: "Dropbox", value: 15.0, color: "#0061FF" },
    PlatformShare { name: "iCloud", value: 10.0, color: "#007AFF" },
    PlatformShare { name: "Samsung Cloud", value: 5.0, color: "#1428A0" },
];

pub const RECENT_TRANSFERS: &[RecentTransfer] = &[
    RecentTransfer {
        file_name: "Project_Report_Q3.pdf",
        source: "Google Drive",
        destination: "OneDrive",
        size: "15 MB",
        status: TransferStatus::Completed,
        date: "2024-07-30",
    },
    RecentTransfer {
        file_name: "Marketing_Assets.zip",
        source: "Dropbox",
        destination: "Google Drive",
        size: "2.1 GB",
        status: TransferStatus::InProgress,
        date: "2024-07-30",
    },
    RecentTransfer {
        file_name: "Team_Meeting_Notes.docx",
        source: "OneDrive",
        destination: "Dropbox",
        size: "0.5 MB",
        status: TransferStatus::Failed,
        date: "2024-07-29",
    },
    RecentTransfer {
        file_name: "Family_Photos_2023.zip",
        source: "iCloud",
        destination: "Google Drive",
        size: "12 GB",
        status: TransferStatus::Completed,
        date: "2024-07-28",
    },
    RecentTransfer {
        file_name: "Backup_Mobile_Data.tar",
        source: "Samsung Cloud",
        destination: "OneDrive",
        size: "5.7 GB",
        status: TransferStatus::Completed,
        date: "2024-07-27",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_usage_sums_to_100() {
        let total: f64 = PLATFORM_USAGE.iter().map(|p| p.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_performance_series_is_monthly() {
        let months: Vec<_> = TRANSFER_PERFORMANCE.iter().map(|p| p.month).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"]);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TransferStatus::InProgress.label(), "In Progress");
        assert_eq!(
            RECENT_TRANSFERS
                .iter()
                .filter(|t| t.status == TransferStatus::Completed)
                .count(),
            3
        );
    }
}
