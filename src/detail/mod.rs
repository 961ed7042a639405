//! 艦隊の各艦について、泊地修理と戦意高揚の見積もりを組み立てる。

mod ship_detail;
pub use ship_detail::{fleet_detail, fleet_repair_detail, ShipRepairDetail};

mod progress;
pub use progress::{fleet_progress, ship_progress, ShipProgress};

mod queue;
pub use queue::{repair_queue, QueueEntry, QueueSortKey};
