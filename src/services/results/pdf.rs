//! 成绩单 PDF
//!
//! 渲染依赖 `pdf` feature，未启用时接口返回 501 和提示信息。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::results::requests::ResultQuery;

#[cfg(feature = "pdf")]
pub(crate) use render::render_result_pdf;

#[cfg(feature = "pdf")]
pub async fn get_student_result_pdf(
    service: &ResultService,
    request: &HttpRequest,
    student_id: i64,
    query: ResultQuery,
) -> ActixResult<HttpResponse> {
    use tracing::error;

    use super::report::student_report;
    use crate::config::AppConfig;
    use crate::models::{ApiResponse, ErrorCode};
    use crate::utils::export::attachment_response;

    let storage = service.get_storage(request);
    let scale = service.get_scale();

    let report = match student_report(&storage, &scale, student_id, query.exam_id).await {
        Ok(report) => report,
        Err(resp) => return Ok(resp),
    };

    let title = &AppConfig::get().app.system_name;
    match render_result_pdf(title, &report, scale.max_marks_per_subject) {
        Ok(bytes) => Ok(attachment_response(
            "application/pdf",
            &format!("result_{}_exam_{}.pdf", student_id, report.exam.id),
            bytes,
        )),
        Err(e) => {
            error!("PDF rendering failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "PDF generation failed",
                )),
            )
        }
    }
}

#[cfg(not(feature = "pdf"))]
pub async fn get_student_result_pdf(
    _service: &ResultService,
    _request: &HttpRequest,
    student_id: i64,
    _query: ResultQuery,
) -> ActixResult<HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};

    tracing::warn!("PDF requested for student {} but the pdf feature is disabled", student_id);
    Ok(HttpResponse::NotImplemented().json(ApiResponse::error_empty(
        ErrorCode::PdfUnavailable,
        "PDF generation requires the `pdf` feature. Rebuild with it enabled.",
    )))
}

#[cfg(feature = "pdf")]
mod render {
    use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

    use crate::errors::SchoolSystemError;
    use crate::services::results::report::StudentReport;

    const PAGE_WIDTH: f32 = 210.0;
    const PAGE_HEIGHT: f32 = 297.0;
    const TOP: f32 = 270.0;
    const BOTTOM: f32 = 25.0;
    const LINE: f32 = 8.0;

    fn export_error(e: printpdf::Error) -> SchoolSystemError {
        SchoolSystemError::export(format!("PDF 生成失败: {e}"))
    }

    struct Cursor<'a> {
        doc: &'a printpdf::PdfDocumentReference,
        layer: PdfLayerReference,
        y: f32,
    }

    impl Cursor<'_> {
        /// 剩余空间不足时换页
        fn ensure_room(&mut self, lines: f32) {
            if self.y - lines * LINE < BOTTOM {
                let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                self.layer = self.doc.get_page(page).get_layer(layer);
                self.y = TOP;
            }
        }

        fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
            self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
        }

        fn advance(&mut self, lines: f32) {
            self.y -= lines * LINE;
        }
    }

    pub(crate) fn render_result_pdf(
        title: &str,
        report: &StudentReport,
        max_marks_per_subject: f64,
    ) -> Result<Vec<u8>, SchoolSystemError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(export_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(export_error)?;

        let mut cursor = Cursor {
            layer: doc.get_page(page).get_layer(layer),
            doc: &doc,
            y: TOP,
        };

        let student = &report.student;
        cursor.text(title, 18.0, 20.0, &bold);
        cursor.advance(1.5);
        cursor.text("Student Result", 14.0, 20.0, &bold);
        cursor.advance(1.5);
        cursor.text(&format!("Name: {}", student.student.name), 11.0, 20.0, &regular);
        cursor.advance(1.0);
        cursor.text(&format!("Roll No: {}", student.student.roll_no), 11.0, 20.0, &regular);
        cursor.advance(1.0);
        cursor.text(
            &format!("Class: {} - {}", student.class_name, student.section),
            11.0,
            20.0,
            &regular,
        );
        cursor.advance(1.0);
        cursor.text(&format!("Exam: {}", report.exam.name), 11.0, 20.0, &regular);
        cursor.advance(1.5);

        cursor.text("Subject", 11.0, 20.0, &bold);
        cursor.text("Marks", 11.0, 120.0, &bold);
        cursor.text("Max", 11.0, 160.0, &bold);
        cursor.advance(1.0);

        for subject in &report.subjects {
            cursor.ensure_room(1.0);
            cursor.text(&subject.subject_name, 11.0, 20.0, &regular);
            cursor.text(&subject.marks.to_string(), 11.0, 120.0, &regular);
            cursor.text(&max_marks_per_subject.to_string(), 11.0, 160.0, &regular);
            cursor.advance(1.0);
        }

        let summary = &report.summary;
        cursor.ensure_room(4.0);
        cursor.advance(0.5);
        cursor.text(
            &format!("Total: {} / {}", summary.total, summary.max_total),
            11.0,
            20.0,
            &bold,
        );
        cursor.advance(1.0);
        cursor.text(
            &format!("Percentage: {:.2}%", summary.percentage),
            11.0,
            20.0,
            &regular,
        );
        cursor.advance(1.0);
        cursor.text(&format!("Grade: {}", summary.grade), 11.0, 20.0, &regular);
        cursor.advance(1.0);
        cursor.text(&format!("Status: {}", summary.status), 11.0, 20.0, &regular);

        drop(cursor);
        doc.save_to_bytes().map_err(export_error)
    }
}

#[cfg(all(test, feature = "pdf"))]
mod tests {
    use super::*;
    use crate::models::exams::entities::Exam;
    use crate::models::results::entities::SubjectMark;
    use crate::models::students::entities::{Student, StudentWithClass};
    use crate::services::results::GradingScale;
    use crate::services::results::report::StudentReport;

    #[test]
    fn test_many_subjects_render_to_pdf() {
        let now = chrono::Utc::now();
        let subjects: Vec<SubjectMark> = (1..=40)
            .map(|i| SubjectMark {
                subject_id: i,
                subject_name: format!("Subject {i}"),
                marks: 50.0,
            })
            .collect();
        let summary = GradingScale::default().summarize(2000.0, subjects.len());
        let report = StudentReport {
            student: StudentWithClass {
                student: Student {
                    id: 1,
                    name: "Asha".into(),
                    roll_no: "01".into(),
                    class_id: 1,
                    created_at: now,
                    updated_at: now,
                },
                class_name: "Grade 5".into(),
                section: "A".into(),
            },
            exam: Exam {
                id: 3,
                class_id: 1,
                name: "Final".into(),
                exam_type: None,
                weight: 1.0,
                created_at: now,
            },
            exams: vec![],
            subjects,
            summary,
        };

        let bytes = render_result_pdf("School", &report, 100.0).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
