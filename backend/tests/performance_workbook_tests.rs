mod support;

use chrono::NaiveDate;
use entregas_dashboard::error::ReportError;
use entregas_dashboard::models::Upload;
use entregas_dashboard::services::filters::PerformanceFilters;
use entregas_dashboard::services::{build_performance_view, PerformanceParams, DEFAULT_PERFORMANCE_SHEET};

use support::{delivery_header, performance_upload, sample_shifts, text, xlsx_bytes};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn render(params: &PerformanceParams) -> entregas_dashboard::api::PerformanceView {
    build_performance_view(
        Some(performance_upload(&sample_shifts())),
        params,
        DEFAULT_PERFORMANCE_SHEET,
    )
    .unwrap()
}

#[test]
fn test_summary_without_filters() {
    let view = render(&PerformanceParams::default());
    assert!(view.info.is_none());

    let summary = view.summary.unwrap();
    assert_eq!(summary.columns[0], "Entregador");
    assert_eq!(summary.rows.len(), 2);

    let jose = &summary.rows[0];
    assert_eq!(jose.courier, "Jose Silva");
    assert_eq!(jose.rides_offered, 40);
    assert_eq!(jose.rides_accepted, 28);
    assert_eq!(jose.rides_rejected, 12);
    assert_eq!(jose.acceptance_rate, Some(70.0));
    // 8 h online over three distinct date values (two dates plus the unreadable one)
    assert_eq!(jose.online_time_pct, Some(33.33));

    let ana = &summary.rows[1];
    assert_eq!(ana.courier, "Ana Lucia");
    assert_eq!(ana.rides_offered, 45);
    assert_eq!(ana.acceptance_rate, Some(77.78));
    assert_eq!(ana.online_time_pct, Some(41.67));
}

#[test]
fn test_filter_options_list_unfiltered_values() {
    let params = PerformanceParams {
        filters: PerformanceFilters {
            sub_regions: vec!["Centro".into()],
            ..Default::default()
        },
        ..Default::default()
    };
    let view = render(&params);
    let options = view.filter_options.unwrap();
    assert_eq!(options.sub_regions, vec!["Centro", "Norte"]);
    assert_eq!(options.shift_periods, vec!["Manhã", "Noite"]);
}

#[test]
fn test_date_range_filter() {
    let params = PerformanceParams {
        filters: PerformanceFilters {
            dates: vec![date(4), date(5)],
            ..Default::default()
        },
        ..Default::default()
    };
    let rows = render(&params).summary.unwrap().rows;

    assert_eq!(rows[0].rides_offered, 40);
    assert_eq!(rows[0].online_time_pct, Some(50.0));
    assert_eq!(rows[1].rides_offered, 40);
    assert_eq!(rows[1].acceptance_rate, Some(75.0));
    assert_eq!(rows[1].online_time_pct, Some(50.0));
}

#[test]
fn test_single_date_is_not_a_range() {
    let params = PerformanceParams {
        filters: PerformanceFilters {
            dates: vec![date(4)],
            ..Default::default()
        },
        ..Default::default()
    };
    let filtered = render(&params).summary.unwrap();
    let unfiltered = render(&PerformanceParams::default()).summary.unwrap();
    assert_eq!(filtered, unfiltered);
}

#[test]
fn test_sub_region_filter() {
    let params = PerformanceParams {
        filters: PerformanceFilters {
            sub_regions: vec!["Centro".into()],
            ..Default::default()
        },
        ..Default::default()
    };
    let rows = render(&params).summary.unwrap().rows;

    assert_eq!(rows[0].rides_offered, 30);
    assert_eq!(rows[0].acceptance_rate, Some(76.67));
    assert_eq!(rows[0].online_time_pct, Some(50.0));
    assert_eq!(rows[1].acceptance_rate, Some(100.0));
    assert_eq!(rows[1].online_time_pct, Some(12.5));
}

#[test]
fn test_drill_down_groups_by_date() {
    let params = PerformanceParams {
        selected_courier: Some("Jose Silva".into()),
        show_details: true,
        ..Default::default()
    };
    let details = render(&params).details.unwrap();

    assert_eq!(details.subheader, "Detalhes do Entregador: Jose Silva");
    assert_eq!(details.rows.len(), 2);
    assert_eq!(details.rows[0].date, date(4));
    assert_eq!(details.rows[0].rides_offered, 30);
    assert_eq!(details.rows[0].rides_accepted, 23);
    assert_eq!(details.rows[0].rides_rejected, 7);
    assert_eq!(details.rows[0].acceptance_rate, Some(76.67));
    assert_eq!(details.rows[1].date, date(5));
    assert_eq!(details.rows[1].acceptance_rate, Some(50.0));
}

#[test]
fn test_drill_down_defaults_to_first_courier() {
    let params = PerformanceParams {
        show_details: true,
        ..Default::default()
    };
    let view = render(&params);
    assert_eq!(view.courier_options, vec!["Jose Silva", "Ana Lucia"]);
    assert_eq!(view.details.unwrap().courier, "Jose Silva");
}

#[test]
fn test_missing_sheet_is_an_error() {
    let bytes = xlsx_bytes(&[("Planilha1", vec![delivery_header()])]);
    let err = build_performance_view(
        Some(Upload::new("entregas.xlsx", bytes)),
        &PerformanceParams::default(),
        DEFAULT_PERFORMANCE_SHEET,
    )
    .unwrap_err();
    match err {
        ReportError::MissingSheet { sheet, .. } => assert_eq!(sheet, "Analise"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_column_is_an_error() {
    let mut header = delivery_header();
    header.remove(2);
    let bytes = xlsx_bytes(&[("Analise", vec![header, vec![text("1")]])]);
    let err = build_performance_view(
        Some(Upload::new("entregas.xlsx", bytes)),
        &PerformanceParams::default(),
        DEFAULT_PERFORMANCE_SHEET,
    )
    .unwrap_err();
    match err {
        ReportError::MissingColumn { column, .. } => assert_eq!(column, "sub_praca"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_configured_sheet_name() {
    let bytes = xlsx_bytes(&[("Resumo", support::delivery_rows(&sample_shifts()))]);
    let view = build_performance_view(
        Some(Upload::new("entregas.xlsx", bytes)),
        &PerformanceParams::default(),
        "Resumo",
    )
    .unwrap();
    assert_eq!(view.summary.unwrap().rows.len(), 2);
}
