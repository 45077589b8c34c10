mod common;

use common::{utc, TestApp};
use salon_agenda::domain::models::transaction::TransactionKind;
use salon_agenda::error::AppError;

#[test]
fn test_monthly_summary_matches_the_ledger() {
    let app = TestApp::new();
    let finance = &app.state.finance_service;

    finance
        .record(40.0, TransactionKind::Service, utc(2030, 6, 3, 10, 0), "Corte - João".to_string(), None)
        .unwrap();
    finance
        .record(10.0, TransactionKind::Expense, utc(2030, 6, 5, 9, 0), "Produtos".to_string(), Some("Suprimentos".to_string()))
        .unwrap();
    finance
        .record(100.0, TransactionKind::SubscriptionSale, utc(2030, 6, 10, 11, 0), "Clube da Escova".to_string(), None)
        .unwrap();

    let summary = finance.monthly_summary(2030, 6).unwrap();

    assert_eq!(summary.income, 140.0);
    assert_eq!(summary.expense, 10.0);
    assert_eq!(summary.profit, 130.0);
    assert_eq!(summary.subscription, 100.0);
    // Plan sales stay out of the ticket: (140 - 100) / 1 service.
    assert_eq!(summary.avg_ticket, 40.0);
}

#[test]
fn test_months_do_not_bleed_into_each_other() {
    let app = TestApp::new();
    let finance = &app.state.finance_service;

    finance
        .record(50.0, TransactionKind::Service, utc(2030, 6, 30, 10, 0), "Junho".to_string(), None)
        .unwrap();
    finance
        .record(70.0, TransactionKind::Service, utc(2030, 7, 1, 10, 0), "Julho".to_string(), None)
        .unwrap();

    let june = finance.monthly_summary(2030, 6).unwrap();
    let july = finance.monthly_summary(2030, 7).unwrap();

    assert_eq!(june.income, 50.0);
    assert_eq!(july.income, 70.0);
    assert!(finance.monthly_summary(2030, 8).unwrap().income == 0.0);
}

#[test]
fn test_average_ticket_is_zero_without_service_sales() {
    let app = TestApp::new();
    let finance = &app.state.finance_service;

    finance
        .record(100.0, TransactionKind::SubscriptionSale, utc(2030, 6, 10, 11, 0), "Plano".to_string(), None)
        .unwrap();

    let summary = finance.monthly_summary(2030, 6).unwrap();

    assert_eq!(summary.income, 100.0);
    assert_eq!(summary.avg_ticket, 0.0);
}

#[test]
fn test_statement_is_newest_first() {
    let app = TestApp::new();
    let finance = &app.state.finance_service;

    finance
        .record(40.0, TransactionKind::Service, utc(2030, 6, 3, 10, 0), "Primeiro".to_string(), None)
        .unwrap();
    finance
        .record(60.0, TransactionKind::Service, utc(2030, 6, 20, 10, 0), "Último".to_string(), None)
        .unwrap();
    finance
        .record(50.0, TransactionKind::Service, utc(2030, 6, 10, 10, 0), "Meio".to_string(), None)
        .unwrap();

    let statement = finance.month_statement(2030, 6).unwrap();

    let names: Vec<_> = statement.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["Último", "Meio", "Primeiro"]);
}

#[test]
fn test_non_positive_amounts_are_rejected() {
    let app = TestApp::new();
    let finance = &app.state.finance_service;

    let err = finance
        .record(0.0, TransactionKind::Service, utc(2030, 6, 3, 10, 0), "Nada".to_string(), None)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = finance
        .record(-5.0, TransactionKind::Expense, utc(2030, 6, 3, 10, 0), "Estorno".to_string(), None)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(app.state.transaction_repo.list().unwrap().is_empty());
}

#[test]
fn test_expense_is_the_only_non_income_kind() {
    assert!(TransactionKind::Service.is_income());
    assert!(TransactionKind::SubscriptionSale.is_income());
    assert!(!TransactionKind::Expense.is_income());
}
