use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use memphis_snippets::linter::sample_form;
use memphis_snippets::{catalog, render, AuthMode, DeploymentConfig, FormState, HeaderEntry};
use std::hint::black_box;

fn many_headers() -> FormState {
    FormState {
        use_headers: true,
        headers: (0..32)
            .map(|i| HeaderEntry::new(format!("x-header-{i}"), format!("value-{i}")))
            .collect(),
        ..sample_form()
    }
}

fn bench_render_each_pair(c: &mut Criterion) {
    let form = sample_form();
    let deployment = DeploymentConfig {
        account_id: Some(42),
        ..DeploymentConfig::default()
    };
    let mut group = c.benchmark_group("render_pair");
    for bundle in catalog::supported().iter().filter(|b| !b.is_documentation_only()) {
        let id = format!("{}_{}", bundle.protocol, bundle.language);
        group.bench_with_input(BenchmarkId::from_parameter(id), bundle, |b, bundle| {
            b.iter(|| {
                black_box(render(
                    black_box(bundle.protocol),
                    black_box(bundle.language),
                    &form,
                    &deployment,
                ))
            })
        });
    }
    group.finish();
}

fn bench_render_whole_catalog(c: &mut Criterion) {
    let form = many_headers();
    let deployment = DeploymentConfig {
        auth_mode: AuthMode::Password,
        ..DeploymentConfig::default()
    };
    c.bench_function("render_catalog_32_headers_password", |b| {
        b.iter(|| {
            for bundle in catalog::supported() {
                let _ = black_box(render(bundle.protocol, bundle.language, &form, &deployment));
            }
        })
    });
}

criterion_group!(benches, bench_render_each_pair, bench_render_whole_catalog);
criterion_main!(benches);
