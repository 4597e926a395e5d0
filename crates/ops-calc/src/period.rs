//! 時間區間解析（全部 / 月份 / 季度）
//!
//! 日期比對採子字串包含：月份 token 出現在日期欄位任何位置即視為符合。
//! 這是刻意的寬鬆比對，日期格式不一致時可能誤判（例如日期中的日數剛好
//! 與月份字串相同）。所有寬鬆比對都集中在此模組，之後若改為真正的日期區間
//! 比較，篩選與統計模組不需更動。

use ops_core::Order;

use crate::filter::ALL;

/// 具有日期欄位的紀錄
pub trait Dated {
    fn date_field(&self) -> &str;
}

impl Dated for Order {
    fn date_field(&self) -> &str {
        &self.order_date
    }
}

/// 季度表：季度標籤 → 三個月份鍵（YYYY-MM）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterCalendar {
    year: i32,
    /// 依 Q1 → Q4 排列
    quarters: Vec<(String, [String; 3])>,
}

impl QuarterCalendar {
    /// 建立某年度的季度表
    pub fn for_year(year: i32) -> Self {
        let quarters = (0..4u32)
            .map(|q| {
                let label = format!("Q{}-{}", q + 1, year);
                let months = [1, 2, 3].map(|m| format!("{}-{:02}", year, q * 3 + m));
                (label, months)
            })
            .collect();

        Self { year, quarters }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 季度包含的月份鍵；未知季度回傳 None
    pub fn months(&self, quarter: &str) -> Option<&[String; 3]> {
        self.quarters
            .iter()
            .find(|(label, _)| label == quarter)
            .map(|(_, months)| months)
    }

    /// 日期所屬季度：第一個有月份鍵出現在日期中的季度
    pub fn quarter_of(&self, date: &str) -> Option<&str> {
        self.quarters
            .iter()
            .find(|(_, months)| months.iter().any(|m| date.contains(m.as_str())))
            .map(|(label, _)| label.as_str())
    }
}

impl Default for QuarterCalendar {
    fn default() -> Self {
        Self::for_year(2025)
    }
}

/// 解析後的時間區間
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Period {
    /// 不限制
    All,
    /// 單一月份（子字串比對）
    Month(String),
    /// 已知季度
    Quarter { label: String, months: [String; 3] },
    /// 以 Q 開頭但不在季度表中：不篩選
    Unrecognized(String),
}

impl Period {
    /// 日期欄位是否落在此區間
    pub fn matches(&self, date: &str) -> bool {
        match self {
            Period::All | Period::Unrecognized(_) => true,
            Period::Month(token) => date.contains(token.as_str()),
            Period::Quarter { months, .. } => months.iter().any(|m| date.contains(m.as_str())),
        }
    }

    /// 是否實際限制紀錄
    pub fn is_restricted(&self) -> bool {
        matches!(self, Period::Month(_) | Period::Quarter { .. })
    }
}

/// 時間區間解析器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodResolver {
    calendar: QuarterCalendar,
}

impl PeriodResolver {
    /// 創建新的解析器
    pub fn new(calendar: QuarterCalendar) -> Self {
        Self { calendar }
    }

    /// 以某年度的季度表建立解析器
    pub fn for_year(year: i32) -> Self {
        Self::new(QuarterCalendar::for_year(year))
    }

    pub fn calendar(&self) -> &QuarterCalendar {
        &self.calendar
    }

    /// 解析區間 token
    pub fn resolve(&self, token: Option<&str>) -> Period {
        let token = match token {
            None => return Period::All,
            Some(t) if t.is_empty() || t == ALL => return Period::All,
            Some(t) => t,
        };

        if !token.starts_with('Q') {
            return Period::Month(token.to_string());
        }

        match self.calendar.months(token) {
            Some(months) => Period::Quarter {
                label: token.to_string(),
                months: months.clone(),
            },
            None => {
                tracing::debug!("未知的季度 token: {}，不篩選", token);
                Period::Unrecognized(token.to_string())
            }
        }
    }

    /// 依區間 token 篩選紀錄，保留原始順序
    pub fn filter<'a, T, I>(&self, records: I, token: Option<&str>) -> Vec<&'a T>
    where
        T: Dated + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let period = self.resolve(token);
        if !period.is_restricted() {
            return records.into_iter().collect();
        }

        records
            .into_iter()
            .filter(|r| period.matches(r.date_field()))
            .collect()
    }

    /// 日期所屬季度
    pub fn quarter_of(&self, date: &str) -> Option<&str> {
        self.calendar.quarter_of(date)
    }
}

/// 月份鍵：日期欄位的前 7 個字元（不足 7 個時取整段），空日期回傳 None
pub fn month_key(date: &str) -> Option<&str> {
    if date.is_empty() {
        return None;
    }

    match date.char_indices().nth(7) {
        Some((idx, _)) => Some(&date[..idx]),
        None => Some(date),
    }
}
