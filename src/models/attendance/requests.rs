use serde::Deserialize;

// 考勤表查询参数，日期默认为今天
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    pub date: Option<String>,
}

// 保存考勤：名单内为出勤，其余学生记为缺勤
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAttendanceRequest {
    pub date: Option<String>,
    #[serde(default)]
    pub present: Vec<i64>,
}
