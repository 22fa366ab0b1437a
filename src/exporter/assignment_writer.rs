// ==========================================
// 仓储货位分配系统 - 分配结果 CSV 写出
// ==========================================
// 输出: 每个输入 SKU 一行,按分配顺序
// 未分配 SKU 的五个货位列留空
// ==========================================

use crate::domain::assignment::SlotAssignment;
use crate::exporter::error::ExportResult;
use crate::importer::field_mapper::columns;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 输出表头
pub const OUTPUT_HEADER: [&str; 9] = [
    columns::SKU_ID,
    columns::ZONE,
    columns::AISLE,
    columns::RACK,
    columns::LEVEL,
    columns::LOCATION_ID,
    columns::OUTPUT_PRIORITY_SCORE,
    columns::HANDLING_TYPE,
    columns::SKU_SIZE_CLASS,
];

pub struct AssignmentWriter;

impl AssignmentWriter {
    /// 写出到文件
    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        assignments: &[SlotAssignment],
    ) -> ExportResult<()> {
        let file = File::create(path.as_ref())?;
        self.write(file, assignments)?;
        info!(
            path = %path.as_ref().display(),
            rows = assignments.len(),
            "分配结果已写出"
        );
        Ok(())
    }

    /// 写出到任意 Writer
    pub fn write<W: Write>(&self, writer: W, assignments: &[SlotAssignment]) -> ExportResult<()> {
        let mut wtr = Writer::from_writer(writer);
        wtr.write_record(OUTPUT_HEADER)?;

        for assignment in assignments {
            wtr.write_record(Self::to_row(assignment))?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn to_row(assignment: &SlotAssignment) -> [String; 9] {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let location = assignment.location.as_ref();

        [
            assignment.sku_id.clone(),
            location.map(|l| text(&l.zone)).unwrap_or_default(),
            location.map(|l| text(&l.aisle)).unwrap_or_default(),
            location.map(|l| text(&l.rack)).unwrap_or_default(),
            location.map(|l| text(&l.level)).unwrap_or_default(),
            location.map(|l| l.location_id.clone()).unwrap_or_default(),
            assignment
                .priority_score
                .map(|p| p.to_string())
                .unwrap_or_default(),
            text(&assignment.handling_type),
            text(&assignment.sku_size_class),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assignment::LocationRef;

    fn placed() -> SlotAssignment {
        SlotAssignment {
            sku_id: "SKU1".to_string(),
            location: Some(LocationRef {
                zone: Some("Golden".to_string()),
                aisle: Some("Aisle-02".to_string()),
                rack: Some("R1".to_string()),
                level: Some("1".to_string()),
                location_id: "G-02-R1-1".to_string(),
            }),
            priority_score: Some(92.5),
            handling_type: Some("fragile".to_string()),
            sku_size_class: Some("Small".to_string()),
        }
    }

    fn unplaced() -> SlotAssignment {
        SlotAssignment {
            sku_id: "SKU2".to_string(),
            location: None,
            priority_score: Some(10.0),
            handling_type: None,
            sku_size_class: Some("Large".to_string()),
        }
    }

    #[test]
    fn test_write_placed_and_unplaced_rows() {
        let mut buf = Vec::new();
        AssignmentWriter.write(&mut buf, &[placed(), unplaced()]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "SKU_ID,Zone,Aisle,Rack,Level,Location_ID,Priority_Score,Handling_Type,SKU_Size_Class"
        );
        assert_eq!(lines[1], "SKU1,Golden,Aisle-02,R1,1,G-02-R1-1,92.5,fragile,Small");
        assert_eq!(lines[2], "SKU2,,,,,,10,,Large");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_priority_score_format() {
        let row = |score: Option<f64>| {
            let mut a = unplaced();
            a.priority_score = score;
            AssignmentWriter::to_row(&a)[6].clone()
        };

        // 整数得分不带小数部分
        assert_eq!(row(Some(70.0)), "70");
        assert_eq!(row(Some(95.5)), "95.5");
        assert_eq!(row(Some(-0.25)), "-0.25");
        assert_eq!(row(None), "");
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        AssignmentWriter.write_to_path(&path, &[unplaced()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
