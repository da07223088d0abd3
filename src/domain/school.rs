use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DataSourceTag;

/// One high school, as returned by the DeepResearch API or synthesized
/// in placeholder mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// School name. Never empty.
    pub name: String,
    /// Prefecture the school belongs to (full name, e.g. 東京都).
    pub prefecture: String,
    /// School type: 県立, 私立 or 国立.
    #[serde(rename = "type")]
    pub school_type: String,
    /// 偏差値 (deviation value).
    pub hensachi: u32,
    /// 学是 (school philosophy), free text.
    pub philosophy: String,
    /// 進学実績 (academic achievement records).
    pub academic_records: AcademicRecords,
    /// 入試情報 (entrance exam information).
    pub entrance_exam_info: EntranceExamInfo,
    /// オープンキャンパス情報 (open campus information).
    pub open_campus: OpenCampus,
    /// 公式画像URL (official image URLs).
    pub official_images: Vec<String>,
    pub contact_info: ContactInfo,
    /// ISO-8601 timestamp of the last update.
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicRecords {
    pub university_advancement_rate: u32,
    pub notable_universities: Vec<String>,
    pub recent_achievements: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntranceExamInfo {
    pub exam_date: String,
    pub subjects: Vec<String>,
    pub application_period: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCampus {
    pub dates: Vec<String>,
    pub programs: Vec<String>,
    pub registration_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub website: String,
    pub email: String,
}

/// The per-prefecture output document. One JSON file per prefecture,
/// fully overwritten on every collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefectureArtifact {
    pub prefecture: String,
    pub total_schools: usize,
    pub schools: Vec<SchoolRecord>,
    /// ISO-8601 timestamp of the collection run.
    pub collection_date: DateTime<Utc>,
    pub data_source: DataSourceTag,
}
