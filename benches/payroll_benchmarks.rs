//! Performance benchmarks for the payroll engine.
//!
//! Covers the pure calculation, the department fold over a realistic
//! organization, and a dashboard request through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::calculation::{calculate_payroll, DEFAULT_WORKING_DAYS};
use payroll_engine::config::{ConfigLoader, TaxPolicy};
use payroll_engine::models::{
    Allowances, CompensationTerms, Deductions, Employee, EmployeeStatus, NewEmployee,
    PayrollRecord, PayrollStatus,
};
use payroll_engine::reporting::summarize_by_department;
use payroll_engine::store::PayrollStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const DEPARTMENTS: [&str; 5] = ["engineering", "sales", "operations", "finance", "hr"];

fn compensation(i: usize) -> CompensationTerms {
    CompensationTerms {
        base_salary: Decimal::from(3000 + (i % 40) * 100),
        allowances: Allowances {
            housing: Decimal::from(500),
            transport: Decimal::from(150),
            medical: Decimal::from(100),
        },
        deductions: Deductions {
            tax: Decimal::ZERO,
            insurance: Decimal::from(120),
            loan: Decimal::from((i % 3) * 50),
        },
    }
}

/// Builds `count` employees with `periods` monthly records each.
fn organization(count: usize, periods: usize) -> (Vec<Employee>, Vec<PayrollRecord>) {
    let policy = TaxPolicy::default();
    let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();

    let employees: Vec<Employee> = (0..count)
        .map(|i| Employee {
            id: format!("emp_{:05}", i),
            name: format!("Employee {}", i),
            email: String::new(),
            position: String::new(),
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            compensation: compensation(i),
            created_at: start,
            updated_at: start,
            status: EmployeeStatus::Active,
        })
        .collect();

    let records = employees
        .iter()
        .flat_map(|employee| {
            let policy = &policy;
            (0..periods).map(move |p| PayrollRecord {
                id: format!("{}_{}", employee.id, p),
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                period: format!("2024-{:02}", p + 1),
                payroll: calculate_payroll(&employee.compensation, policy, DEFAULT_WORKING_DAYS),
                created_at: start + Duration::days(30 * p as i64),
                status: PayrollStatus::Calculated,
            })
        })
        .collect();

    (employees, records)
}

/// Benchmark: Single payroll breakdown.
fn bench_single_calculation(c: &mut Criterion) {
    let terms = compensation(7);
    let policy = TaxPolicy::default();

    c.bench_function("single_calculation", |b| {
        b.iter(|| calculate_payroll(black_box(&terms), &policy, DEFAULT_WORKING_DAYS))
    });
}

/// Benchmark: Department fold for growing organizations with 12 periods each.
fn bench_department_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("department_summary");

    for count in [100usize, 1000] {
        let (employees, records) = organization(count, 12);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| summarize_by_department(black_box(&employees), black_box(&records)))
        });
    }

    group.finish();
}

/// Benchmark: GET /dashboard/stats over 500 stored records.
fn bench_dashboard_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(PayrollStore::new());
    let policy = TaxPolicy::default();

    rt.block_on(async {
        for i in 0..500 {
            let employee = store
                .create_employee(NewEmployee {
                    name: format!("Employee {}", i),
                    department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                    compensation: compensation(i),
                    ..Default::default()
                })
                .await;
            store
                .record_payroll(&employee.id, "2024-01", |e| {
                    calculate_payroll(&e.compensation, &policy, DEFAULT_WORKING_DAYS)
                })
                .await
                .unwrap();
        }
    });

    let router = create_router(AppState::new(ConfigLoader::default(), store));

    c.bench_function("dashboard_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/dashboard/stats")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_department_summary,
    bench_dashboard_request
);
criterion_main!(benches);
