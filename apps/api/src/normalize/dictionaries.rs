//! Static vocabularies used by the normalizer.
//!
//! Canonical values on the right-hand side of the synonym tables are the
//! spellings used in the reference sheet. Terms already canonical (IT,
//! 自動車, ...) are left out and pass through keyword extraction unchanged.

/// Position keywords that indicate a management role. Checked first.
pub const MANAGEMENT_KEYWORDS: &[&str] = &[
    "部長",
    "マネージャー",
    "CFO",
    "社長",
    "取締役",
    "役員",
    "統括",
    "部門長",
    "課長",
    "GM",
    "ゼネラルマネージャー",
    "ディレクター",
    "VP",
    "本部長",
    "事業部長",
    "支店長",
    "所長",
    "manager",
    "director",
    "chief",
    "head",
    "president",
    "vice president",
    "executive",
];

pub const STAFF_KEYWORDS: &[&str] = &[
    "スタッフ",
    "社員",
    "担当",
    "メンバー",
    "アシスタント",
    "アソシエイト",
    "スペシャリスト",
    "コーディネーター",
    "staff",
    "associate",
    "specialist",
    "coordinator",
    "assistant",
    "member",
    "employee",
];

pub const INDUSTRY_SYNONYMS: &[(&str, &str)] = &[
    ("製薬", "医薬品"),
    ("薬", "医薬品"),
    ("医療", "医薬品"),
    ("ファーマ", "医薬品"),
    ("おもちゃ", "玩具"),
];

pub const DEPARTMENT_SYNONYMS: &[(&str, &str)] = &[
    ("戦略", "経営企画"),
    ("企画", "経営企画"),
    ("経営管理", "経営企画"),
    ("経営", "経営企画"),
    ("販売", "営業"),
    ("セールス", "営業"),
    ("マーケ", "マーケティング"),
    ("人材", "人事"),
    ("HR", "人事"),
    ("経理", "財務"),
    ("会計", "財務"),
    ("開発", "製品開発(R&D)"),
    ("研究", "製品開発(R&D)"),
    ("R&D", "製品開発(R&D)"),
    ("研究開発", "製品開発(R&D)"),
    ("IT", "システム"),
    ("情報システム", "システム"),
    ("法務", "法務・知財"),
    ("知財", "法務・知財"),
    ("品質", "品質管理"),
    ("QA", "品質管理"),
    ("購買", "調達"),
    ("資材", "調達"),
    ("生産", "製造"),
    ("工場", "製造"),
];

/// Filler words and particles removed before matching, in removal order.
pub const STOPWORDS: &[&str] = &[
    "業界", "部門", "担当", "関連", "系", "分野", "の", "する", "を", "に", "で", "は",
];
