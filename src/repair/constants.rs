//! 泊地修理・戦意高揚の定数。

/// 泊地修理の最短発動間隔 (20分)。
pub const REPAIR_INTERVAL_MS: u64 = 20 * 60 * 1000;

/// 戦意高揚の発動間隔 (15分)。
pub const MORALE_INTERVAL_MS: u64 = 15 * 60 * 1000;

/// 入渠時間の式に含まれる固定のオフセット。
pub const DOCKING_OFFSET_MS: u64 = 30 * 1000;

/// 中破判定の耐久割合。これ以下は泊地修理の対象外。
pub const MODERATE_DAMAGE_THRESHOLD: f64 = 0.5;

/// 小破判定の耐久割合。野埼と二番艦はこれを超えている必要がある。
pub const BELOW_MINOR_PERCENT: f64 = 0.75;

/// 明石と朝日改を併用した場合の修理時間の倍率。
pub const PAIRED_REPAIR_TIME_MULTIPLIER: f64 = 0.85;

/// 戦意高揚で到達できる疲労度の上限。
pub const MAX_CONDITION: u16 = 54;

/// 野埼自身に必要な疲労度の下限。
pub const MIN_BOOSTER_CONDITION: u16 = 30;

/// レベルが省略された場合の値。
pub const DEFAULT_LEVEL: u16 = 1;

/// 艦種が省略された場合の値 (海防艦)。
pub const DEFAULT_SHIP_TYPE: u16 = 1;
