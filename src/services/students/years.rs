use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::students::responses::YearEntry;

/// 学校覆盖的学年范围（7 至 13，含两端）
const YEAR_MIN: i32 = 7;
const YEAR_MAX: i32 = 13;

pub async fn handle_list_years() -> ActixResult<HttpResponse> {
    let years: Vec<YearEntry> = (YEAR_MIN..=YEAR_MAX)
        .map(|year| YearEntry { year })
        .collect();
    Ok(HttpResponse::Ok().json(years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_bounds() {
        let years: Vec<i32> = (YEAR_MIN..=YEAR_MAX).collect();
        assert_eq!(years.first(), Some(&7));
        assert_eq!(years.last(), Some(&13));
        assert_eq!(years.len(), 7);
    }
}
