// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::WordRecord;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// 表格写出错误
    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),
    /// 不支持的格式
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// 按文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// 单个工作表，首行为表头，缺失的释义为空单元格
fn encode_xlsx(records: &[WordRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in WordRecord::COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, cell) in record.to_row().iter().enumerate() {
            if !cell.is_empty() {
                sheet.write_string(row as u32 + 1, col as u16, *cell)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// 将记录编码为指定格式
///
/// 分隔格式和 XLSX 带表头 `tone,word,pronunciation,meaning`，缺失的释义为空单元格；
/// JSON 为对象数组，缺失的释义为 `null`
pub fn encode(records: &[WordRecord], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let sep = match format {
        ExportFormat::Json => return Ok(serde_json::to_vec_pretty(records)?),
        ExportFormat::Xlsx => return encode_xlsx(records),
        ExportFormat::Csv => ',',
        ExportFormat::Tsv => '\t',
    };

    let mut buf = Vec::new();
    write_row(&mut buf, &WordRecord::COLUMNS, sep)?;
    for record in records {
        write_row(&mut buf, &record.to_row(), sep)?;
    }
    Ok(buf)
}

/// 本地文件导出器
pub struct LocalExporter;

impl LocalExporter {
    /// 写出数据集
    ///
    /// # 参数
    ///
    /// * `path` - 输出文件路径，父目录不存在时自动创建
    /// * `records` - 词条记录
    /// * `format` - 导出格式
    pub async fn write(
        path: &Path,
        records: &[WordRecord],
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        let data = encode(records, format)?;

        // 确保目录存在
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(&data).await?;
        file.flush().await?;

        Ok(())
    }
}
