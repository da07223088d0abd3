//! Deterministic placeholder data generator.
//!
//! Used when no API credential is configured. Every field is derived from
//! the prefecture name and the record index, so repeated runs produce the
//! same names, types and scores (only timestamps differ).

use chrono::Utc;

use crate::domain::{
    AcademicRecords, ContactInfo, DataSourceTag, EntranceExamInfo, OpenCampus, PrefectureArtifact,
    SchoolRecord,
};
use crate::prefectures::short_name;

/// Number of sample schools generated per prefecture.
pub const SCHOOLS_PER_PREFECTURE: usize = 5;

const SCHOOL_TYPES: [&str; 3] = ["県立", "私立", "国立"];

/// FNV-1a 64-bit over UTF-8 bytes. Pinned here so placeholder scores are
/// identical across platforms and builds, unlike a hasher with a random
/// per-process seed.
fn fnv1a(input: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut hash = OFFSET;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Generate the placeholder artifact for one prefecture: exactly
/// [`SCHOOLS_PER_PREFECTURE`] schools with formula-derived fields.
pub fn generate(prefecture: &str) -> PrefectureArtifact {
    let schools: Vec<SchoolRecord> = (0..SCHOOLS_PER_PREFECTURE)
        .map(|i| generate_school(prefecture, i))
        .collect();

    PrefectureArtifact {
        prefecture: prefecture.to_string(),
        total_schools: schools.len(),
        schools,
        collection_date: Utc::now(),
        data_source: DataSourceTag::Placeholder,
    }
}

fn generate_school(prefecture: &str, i: usize) -> SchoolRecord {
    let school_type = SCHOOL_TYPES[i % 3];
    let short = short_name(prefecture);
    let letter = (b'A' + i as u8) as char;
    let name = format!("{short}{school_type}{letter}高等学校");

    // Deviation values land in [50, 89]: base 50, index step 5, hash spread 20.
    let hensachi = 50 + (i as u32) * 5 + (fnv1a(&name) % 20) as u32;

    let site_stem = name.trim_end_matches("高等学校");

    SchoolRecord {
        philosophy: format!(
            "{name}は、生徒一人ひとりの個性を大切にし、確かな学力と豊かな人間性を育む教育を実践しています。"
        ),
        academic_records: AcademicRecords {
            university_advancement_rate: 85 + (i as u32) * 2,
            notable_universities: vec![
                "東京大学".to_string(),
                "早稲田大学".to_string(),
                "慶應義塾大学".to_string(),
                "明治大学".to_string(),
            ],
            recent_achievements: format!(
                "令和{}年度大学合格実績: 国公立大学{}名、私立大学{}名",
                4 + i,
                20 + i * 3,
                50 + i * 10
            ),
        },
        entrance_exam_info: EntranceExamInfo {
            exam_date: format!("令和6年{}月{}日", 2 + i, 10 + i),
            subjects: vec![
                "国語".to_string(),
                "数学".to_string(),
                "英語".to_string(),
                "理科".to_string(),
                "社会".to_string(),
            ],
            application_period: format!("令和5年12月{}日～12月{}日", 1 + i, 15 + i),
            capacity: 200 + (i as u32) * 40,
        },
        open_campus: OpenCampus {
            dates: vec![
                format!("令和5年{}月{}日", 7 + i, 15 + i * 2),
                format!("令和5年{}月{}日", 8 + i, 20 + i * 3),
            ],
            programs: vec![
                "学校説明会".to_string(),
                "授業体験".to_string(),
                "部活動見学".to_string(),
                "個別相談".to_string(),
            ],
            registration_required: true,
        },
        official_images: vec![
            format!("https://example.com/schools/{prefecture}/{name}/main.jpg"),
            format!("https://example.com/schools/{prefecture}/{name}/campus.jpg"),
            format!("https://example.com/schools/{prefecture}/{name}/facilities.jpg"),
        ],
        contact_info: ContactInfo {
            address: format!("{prefecture}○○市○○町1-2-3"),
            phone: format!("0{}-{}-{}", 3 + i, 1000 + i * 100, 2000 + i * 200),
            website: format!("https://www.{site_stem}.ed.jp"),
            email: format!("info@{site_stem}.ed.jp"),
        },
        last_updated: Utc::now().to_rfc3339(),
        name,
        prefecture: prefecture.to_string(),
        school_type: school_type.to_string(),
        hensachi,
    }
}
