//! 文件下载辅助

use actix_web::HttpResponse;

use crate::errors::SchoolSystemError;

/// 把表头和数据行写成 CSV 字节
pub fn write_csv<I, R>(header: &[String], rows: I) -> Result<Vec<u8>, SchoolSystemError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.into_inner()
        .map_err(|e| SchoolSystemError::export(format!("CSV 生成失败: {e}")))
}

/// 附件形式下载
pub fn attachment_response(content_type: &str, filename: &str, body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv_quotes_commas() {
        let header = vec!["Roll No".to_string(), "Name".to_string()];
        let rows = vec![vec!["1".to_string(), "Rao, Asha".to_string()]];
        let bytes = write_csv(&header, rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "Roll No,Name\n1,\"Rao, Asha\"\n");
    }
}
