//! Prompt templates. The assistant works on academic Vietnamese (and
//! English) text, so the instructions are written in Vietnamese.

pub const CONTEXTUAL_SYSTEM: &str = "Bạn là chuyên gia kiểm tra tiếng Việt. Chỉ trả về JSON.";

pub const POLISH_SYSTEM: &str =
    "Bạn là chuyên gia viết bài báo khoa học, giúp tác giả cải thiện văn phong academic.";

/// Ask for contextual errors as `{"errors": [{original, correct, context}]}`.
pub fn contextual_prompt(text: &str) -> String {
    format!(
        r#"Bạn là chuyên gia tiếng Việt chuyên về văn bản KHOA HỌC/HỌC THUẬT.

NGỮ CẢNH: Đây là văn bản trong hệ thống quản lý BÀI BÁO KHOA HỌC (scientific paper/conference paper).

Tìm LỖI NGỮ CẢNH (ví dụ: "phương pháp moi" → "phương pháp mới", "bai bao" → "bài báo").

LƯU Ý:
- "bài báo" = scientific paper (ĐÚNG)
- "bài bảo" hoặc "báo cáo" = report (SAI trong ngữ cảnh này)
- Chỉ sửa từ SAI RÕ RÀNG, không sửa từ đúng ngữ pháp

CHỈ TRẢ VỀ JSON:
{{"errors": [{{"original": "từ sai", "correct": "từ đúng", "context": "ngữ cảnh"}}]}}

Nếu không có lỗi: {{"errors": []}}

Văn bản:
{text}"#
    )
}

/// Ask for an academic rewrite that keeps language and content.
pub fn polish_prompt(text: &str) -> String {
    format!(
        r#"Bạn là một chuyên gia viết bài báo khoa học. Hãy cải thiện đoạn văn sau để phù hợp với phong cách học thuật (academic writing), giữ nguyên ý nghĩa nhưng làm cho văn phong chuyên nghiệp hơn.

Yêu cầu:
- Giữ nguyên ngôn ngữ gốc (tiếng Việt hoặc tiếng Anh)
- Sửa lỗi ngữ pháp nếu có
- Cải thiện cấu trúc câu cho rõ ràng hơn
- Dùng từ ngữ học thuật phù hợp
- KHÔNG thêm hoặc bớt thông tin
- CHỈ trả về văn bản đã chỉnh sửa, KHÔNG giải thích

Văn bản gốc:
{text}

Văn bản đã cải thiện:"#
    )
}
