// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成 SKU 表 / 货位表 CSV 样例数据集,供手工运行
// 输出: tests/fixtures/datasets/*.csv
// 用法: cargo run --bin generate_test_data
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs::{self, File};

const DATASET_DIR: &str = "tests/fixtures/datasets";

const SKU_HEADER: &[&str] = &[
    "SKU_ID",
    "AI_Priority_Score_100",
    "SKU_Size_Class",
    "Handling_Type",
    "Family_or_Category",
];

const LOCATION_HEADER: &[&str] = &[
    "Location_ID",
    "Zone",
    "Aisle",
    "Rack",
    "Level",
    "Allowed_Size_Class",
    "Special_Constraint",
];

const SIZES: &[&str] = &["Small", "Medium", "Large"];
const HANDLING: &[&str] = &["standard", "standard", "fragile", "chilled", "standard"];
const CATEGORIES: &[&str] = &["General", "Glassware", "Frozen Food", "Hazardous Chemicals", "Toys"];
const ZONES: &[&str] = &["Golden", "Standard", "Overflow"];
const ALLOWED: &[&str] = &["", "S", "M", "L", "M+L"];
const CONSTRAINTS: &[&str] = &["", "", "Fragile-only", "Chilled storage", ""];

// SKU 记录
#[derive(Clone)]
struct SkuRow {
    sku_id: String,
    priority: String,
    size_class: String,
    handling_type: String,
    category: String,
}

impl SkuRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.sku_id.clone(),
            self.priority.clone(),
            self.size_class.clone(),
            self.handling_type.clone(),
            self.category.clone(),
        ]
    }
}

// 货位记录
#[derive(Clone)]
struct LocationRow {
    location_id: String,
    zone: String,
    aisle: String,
    rack: String,
    level: String,
    allowed_size_class: String,
    special_constraint: String,
}

impl LocationRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.location_id.clone(),
            self.zone.clone(),
            self.aisle.clone(),
            self.rack.clone(),
            self.level.clone(),
            self.allowed_size_class.clone(),
            self.special_constraint.clone(),
        ]
    }
}

// 确定性生成,不依赖随机数
fn generate_sku(index: usize) -> SkuRow {
    let handling = HANDLING[index % HANDLING.len()];
    let category = match handling {
        "fragile" => "Glassware",
        "chilled" => "Frozen Food",
        _ => CATEGORIES[index % CATEGORIES.len()],
    };
    SkuRow {
        sku_id: format!("SKU{:05}", index),
        priority: format!("{:.1}", ((index * 37) % 1000) as f64 / 10.0),
        size_class: SIZES[index % SIZES.len()].to_string(),
        handling_type: handling.to_string(),
        category: category.to_string(),
    }
}

fn generate_location(index: usize) -> LocationRow {
    let zone = ZONES[index % ZONES.len()];
    let aisle = index / 6 + 1;
    let rack = index % 4 + 1;
    let level = index % 3 + 1;
    LocationRow {
        location_id: format!("{}-{:02}-R{}-{}", &zone[..1], aisle, rack, level),
        zone: zone.to_string(),
        aisle: format!("Aisle-{:02}", aisle),
        rack: format!("R{}", rack),
        level: level.to_string(),
        allowed_size_class: ALLOWED[index % ALLOWED.len()].to_string(),
        special_constraint: CONSTRAINTS[index % CONSTRAINTS.len()].to_string(),
    }
}

fn write_skus(name: &str, header: &[&str], rows: &[SkuRow]) -> Result<(), Box<dyn Error>> {
    let file = File::create(format!("{}/{}", DATASET_DIR, name))?;
    let mut wtr = Writer::from_writer(file);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(&row.to_row())?;
    }
    wtr.flush()?;
    println!("✓ 生成 {} ({}条)", name, rows.len());
    Ok(())
}

fn write_locations(name: &str, rows: &[LocationRow]) -> Result<(), Box<dyn Error>> {
    let file = File::create(format!("{}/{}", DATASET_DIR, name))?;
    let mut wtr = Writer::from_writer(file);
    wtr.write_record(LOCATION_HEADER)?;
    for row in rows {
        wtr.write_record(&row.to_row())?;
    }
    wtr.flush()?;
    println!("✓ 生成 {} ({}条)", name, rows.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(DATASET_DIR)?;

    generate_normal_data()?;
    generate_capacity_pressure()?;
    generate_dq_issues()?;
    generate_fallback_priority_column()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

// 01: 常规规模,容量充足
fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let skus: Vec<SkuRow> = (0..200).map(generate_sku).collect();
    let locations: Vec<LocationRow> = (0..60).map(generate_location).collect();
    write_skus("01_normal_skus.csv", SKU_HEADER, &skus)?;
    write_locations("01_normal_locations.csv", &locations)
}

// 02: SKU 数远超总容量
fn generate_capacity_pressure() -> Result<(), Box<dyn Error>> {
    let skus: Vec<SkuRow> = (0..1000).map(generate_sku).collect();
    let locations: Vec<LocationRow> = (0..20).map(generate_location).collect();
    write_skus("02_pressure_skus.csv", SKU_HEADER, &skus)?;
    write_locations("02_pressure_locations.csv", &locations)
}

// 03: 数据质量问题（重复 ID、缺失得分、未识别尺寸与库区）
fn generate_dq_issues() -> Result<(), Box<dyn Error>> {
    let mut skus: Vec<SkuRow> = (0..20).map(generate_sku).collect();
    skus[3].priority = String::new();
    skus[5].size_class = "Jumbo".to_string();
    skus[7].sku_id = skus[6].sku_id.clone();
    skus[9].sku_id = String::new();

    let mut locations: Vec<LocationRow> = (0..10).map(generate_location).collect();
    locations[1].zone = "Mezzanine".to_string();
    locations[2].allowed_size_class = "XL".to_string();
    locations[4].aisle = String::new();
    locations[6].location_id = locations[5].location_id.clone();

    write_skus("03_dq_skus.csv", SKU_HEADER, &skus)?;
    write_locations("03_dq_locations.csv", &locations)
}

// 04: 只有备选优先级列
fn generate_fallback_priority_column() -> Result<(), Box<dyn Error>> {
    let header: Vec<&str> = SKU_HEADER
        .iter()
        .map(|h| if *h == "AI_Priority_Score_100" { "AI_Priority_Score" } else { *h })
        .collect();
    let skus: Vec<SkuRow> = (0..30).map(generate_sku).collect();
    let locations: Vec<LocationRow> = (0..12).map(generate_location).collect();
    write_skus("04_fallback_skus.csv", &header, &skus)?;
    write_locations("04_fallback_locations.csv", &locations)
}
