use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tower::ServiceExt; // for .oneshot

use cost_router::auth::StaticKeyList;
use cost_router::config::Settings;
use cost_router::logging::{NewRequestLog, RequestLog};
use cost_router::providers::StubProvider;
use cost_router::routing::ModelRouter;
use cost_router::server::storage_traits::{BoxFuture, RequestLogStore};
use cost_router::server::{AppState, build_app};

// --------------------- In-memory store for benchmarking ---------------------

#[derive(Clone, Default)]
struct MemStore {
    logs: Arc<tokio::sync::RwLock<Vec<RequestLog>>>,
}

impl RequestLogStore for MemStore {
    fn append<'a>(&'a self, entry: NewRequestLog) -> BoxFuture<'a, rusqlite::Result<RequestLog>> {
        Box::pin(async move {
            let mut guard = self.logs.write().await;
            let id = guard.len() as i64 + 1;
            let log = RequestLog::from_new(id, Utc::now(), entry);
            guard.push(log.clone());
            Ok::<_, rusqlite::Error>(log)
        })
    }

    fn list_all<'a>(&'a self) -> BoxFuture<'a, rusqlite::Result<Vec<RequestLog>>> {
        Box::pin(async move { Ok::<_, rusqlite::Error>(self.logs.read().await.clone()) })
    }
}

fn build_bench_app() -> Router {
    let settings = Settings::default();
    let credentials = Arc::new(StaticKeyList::from_config(&settings.auth));
    let state = AppState::new(
        settings,
        Arc::new(MemStore::default()),
        credentials,
        Arc::new(StubProvider),
    )
    .unwrap();
    build_app(Arc::new(state))
}

fn bench_routing(c: &mut Criterion) {
    let router = ModelRouter::default();
    let short = "Hello world this is a test";
    let long = "lorem ipsum dolor sit amet ".repeat(200);

    let mut group = c.benchmark_group("routing");
    for (name, prompt) in [("short", short), ("long", long.as_str())] {
        group.bench_with_input(BenchmarkId::new("select+estimate", name), prompt, |b, p| {
            b.iter(|| {
                let model = router.select(black_box(p), black_box("cheap"));
                black_box(router.estimate(model, p).unwrap());
            })
        });
    }
    group.finish();
}

fn bench_endpoints(c: &mut Criterion) {
    let app = build_bench_app();
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("endpoints");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function(BenchmarkId::new("GET /chat/demo", "anon"), |b| {
        b.to_async(&rt).iter(|| async {
            let req = Request::builder()
                .method("GET")
                .uri("/chat/demo")
                .body(Body::empty())
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            black_box(resp);
        })
    });

    group.bench_function(BenchmarkId::new("POST /chat", "testkey123"), |b| {
        b.to_async(&rt).iter(|| async {
            let req = Request::builder()
                .method("POST")
                .uri("/chat")
                .header("authorization", "Bearer testkey123")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"prompt":"Hello world this is a test","mode":"cheap"}"#))
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            black_box(resp);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_routing, bench_endpoints);
criterion_main!(benches);
