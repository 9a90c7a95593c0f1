//! Built-in tables for academic Vietnamese.
//!
//! The word list is order sensitive: when two words fold to the same key the
//! later one wins in the [`DictionaryIndex`](crate::DictionaryIndex).

/// Correctly accented words, grouped by topic.
pub const ACADEMIC_WORDS: &[&str] = &[
    // academic vocabulary
    "bài", "báo", "cáo", "này", "nay", "trình", "bày", "kết", "quả",
    "nghiên", "cứu", "phương", "pháp", "về", "sử", "dụng", "công", "nghệ",
    "thông", "tin", "giáo", "dục", "hệ", "thống", "dữ", "liệu",
    "phân", "tích", "đánh", "giá", "thiết", "kế", "phát", "triển",
    "nghiệp", "sinh", "viên", "giảng", "môn", "học", "khoa",
    "đề", "tài", "liệu", "chuyên", "mục", "tiêu", "yêu", "cầu",
    "thực", "hiện", "ứng", "dụng", "giải", "pháp", "vấn", "đề",
    // pronouns and connectives
    "tôi", "tui", "chúng", "chung", "anh", "chị", "em",
    "khi", "được", "các", "cho", "của", "từ", "với", "và",
    "có", "không", "là", "đã", "sẽ", "để", "theo", "nhưng",
    "mà", "nếu", "thì", "cũng", "đến", "trong", "trên", "tại",
    "sau", "trước", "đây", "đó", "người", "năm", "ngày", "thời",
    // common verbs
    "thập", "làm", "việc", "đào", "tạo", "gian",
    "liên", "quan", "hệ", "thứ", "kiểm", "tra",
    // places
    "nước", "thế", "giới", "quốc", "tế", "Hồ", "Chí", "Minh",
    "Hà", "Nội", "Đà", "Nẵng", "Cần", "Thơ", "Huế", "Hải", "Phòng",
    // politics, economy, society
    "chính", "trị", "kinh", "tế", "xã", "hội", "văn", "hóa",
    "khách", "hàng", "sản", "phẩm", "dịch", "vụ", "quản", "lý",
    // organisations
    "tổ", "chức", "doanh", "công", "ty", "cơ", "quan", "đơn", "vị",
    "địa", "điểm", "vị", "trí", "khu", "vực", "miền", "tỉnh", "thành",
    "phố", "thị", "trường", "trường", "lớp", "trường", "hợp",
    // descriptors
    "hình", "thức", "loại", "kiểu", "mẫu", "số", "lượng",
    "chất", "lượng", "tiêu", "chuẩn", "quy", "định", "luật", "pháp",
    // roles
    "quyền", "lợi", "nghĩa", "vụ", "trách", "nhiệm", "ủy", "ban",
    "hội", "đồng", "đại", "biểu", "ủy", "viên", "chủ", "tịch",
    "phó", "ký", "kế", "toán", "giám", "đốc", "hiệu", "trưởng",
    // technology
    "máy", "tính", "điện", "thoại", "mạng", "internet", "website",
    "email", "phần", "mềm", "cứng", "lập", "trình", "chương", "trình",
    "tệp", "tin", "dữ", "liệu", "cơ", "sở", "bảng", "trường", "bản", "ghi",
    // systems
    "giao", "diện", "người", "dùng", "đăng", "nhập", "đăng", "ký",
    "tài", "khoản", "mật", "khẩu", "bảo", "mật", "an", "toàn",
    "sao", "lưu", "phục", "hồi", "cập", "nhật", "nâng", "cấp",
    // actions
    "khởi", "động", "tắt", "khởi", "chạy", "dừng", "tạm", "dừng",
    "kết", "nối", "ngắt", "tải", "lên", "xuống", "gửi", "nhận",
    "mở", "đóng", "lưu", "xóa", "sửa", "thêm", "bớt", "tìm", "kiếm",
    "tìm", "tra", "cứu", "tra", "tìm", "xem", "đọc", "viết", "in",
    "chỉnh", "sửa", "điều", "chỉnh", "thay", "đổi", "cải", "tiến",
    // workflow
    "nộp", "gửi", "nhận", "duyệt", "phê", "duyệt", "từ", "chối",
    "chấp", "nhận", "đồng", "ý", "hủy", "bỏ", "hủy", "hoàn", "thành",
    "hoàn", "tất", "kết", "thúc", "bắt", "đầu", "khởi", "đầu",
];

/// Multi-word academic phrases, matched before single words.
/// `bai bao` means a scientific paper; it must never become `báo cáo`.
pub const ACADEMIC_PHRASES: &[&str] = &[
    "bài báo",
    "nghiên cứu",
    "phương pháp",
    "kết quả",
    "dữ liệu",
    "phân tích",
    "thạc sĩ",
    "tiến sĩ",
    "hội nghị",
    "tóm tắt",
    "từ khóa",
    "học máy",
    "trí tuệ nhân tạo",
    "công nghệ thông tin",
];

/// Vietnamese function words plus common English ones.
pub const STOPWORDS: &[&str] = &[
    // pronouns
    "tôi", "bạn", "anh", "chị", "em", "họ", "chúng", "ta", "mình",
    // conjunctions
    "và", "hoặc", "nhưng", "mà", "hay", "còn", "cũng", "vì", "do",
    // prepositions
    "của", "cho", "với", "từ", "trong", "ngoài", "trên", "dưới", "về",
    "đến", "tại", "qua", "theo", "bằng", "để", "khi", "sau", "trước",
    // particles
    "là", "được", "có", "không", "đã", "sẽ", "đang", "vẫn",
    "thì", "nếu", "như", "bởi", "nên", "rằng", "mỗi", "các", "này",
    "đó", "kia", "nào", "gì", "ai", "đâu", "thế",
    // common verbs
    "làm", "đi", "ra", "vào", "lên", "xuống",
    // numerals
    "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
    "mười", "trăm", "nghìn", "triệu", "tỷ",
    // English
    "the", "and", "for", "this", "that", "with", "from", "are", "was",
    "were", "been", "have", "has", "had", "can", "will", "would", "could",
];
