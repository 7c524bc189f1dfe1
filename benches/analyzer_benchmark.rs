//! Benchmarks for the power-quality analyzer.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use ups_quality::PowerQualityAnalyzer;
use ups_quality::model::SnmpValue;
use ups_quality::parsers::normalize;

fn poll(voltage: i64) -> serde_json::Value {
    json!({
        "ups_host": "ups-bench",
        "capacity_watts": 1500,
        "snmp_data": {
            "input_voltage": format!("PowerNet-MIB::upsAdvInputLineVoltage.0 = INTEGER: {voltage}"),
            "output_voltage": "PowerNet-MIB::upsAdvOutputVoltage.0 = Gauge32: 230",
            "input_frequency": "PowerNet-MIB::upsAdvInputFrequency.0 = Gauge32: 50",
            "output_load": "PowerNet-MIB::upsAdvOutputLoad.0 = Gauge32: 72",
            "battery_capacity": "PowerNet-MIB::upsAdvBatteryCapacity.0 = Gauge32: 100",
            "battery_temperature": "PowerNet-MIB::upsAdvBatteryTemperature.0 = Gauge32: 38",
            "ups_basic_state": "PowerNet-MIB::upsBasicOutputStatus.0 = INTEGER: 12",
            "ups_model": "PowerNet-MIB::upsBasicIdentModel.0 = STRING: \"Smart-UPS 1500\""
        }
    })
}

fn benchmark_normalize(c: &mut Criterion) {
    let raw = SnmpValue::from("PowerNet-MIB::upsAdvInputLineVoltage.0 = Gauge32: 228");
    c.bench_function("normalize_gauge", |b| b.iter(|| normalize(black_box(&raw))));
}

fn benchmark_analyze(c: &mut Criterion) {
    let analyzer = PowerQualityAnalyzer::new();
    let document = poll(190);
    c.bench_function("analyze_value", |b| {
        b.iter(|| analyzer.analyze_value(black_box(&document)));
    });

    let text = document.to_string();
    c.bench_function("analyze_str", |b| {
        b.iter(|| analyzer.analyze_str(black_box(&text)));
    });
}

fn benchmark_fleet(c: &mut Criterion) {
    let analyzer = PowerQualityAnalyzer::new().detailed(true);
    let mut group = c.benchmark_group("fleet");
    for size in [10_usize, 100, 1000] {
        let fleet: Vec<serde_json::Value> = (0..size)
            .map(|i| poll(180 + (i % 90) as i64))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &fleet, |b, fleet| {
            b.iter(|| {
                fleet
                    .iter()
                    .map(|doc| analyzer.analyze_value(doc).quality_score)
                    .sum::<f64>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_normalize, benchmark_analyze, benchmark_fleet);
criterion_main!(benches);
