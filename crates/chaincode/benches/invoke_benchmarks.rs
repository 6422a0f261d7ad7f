use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use prodchain_chaincode::{Chaincode, ProductChaincode};
use prodchain_identity::{extract_identity, fixtures};
use prodchain_shim::{InMemoryState, TransactionRequest};

fn creator() -> Vec<u8> {
    let pem = fixtures::creator_pem("Admin@org1", "Org1.example.com");
    fixtures::serialized_identity("Org1MSP", &pem)
}

fn bench_extract_identity(c: &mut Criterion) {
    let creator = creator();
    c.bench_function("extract_identity", |b| {
        b.iter(|| extract_identity(black_box(&creator)))
    });
}

fn bench_invoke_add(c: &mut Criterion) {
    let chaincode = ProductChaincode::default();
    let creator = creator();

    c.bench_function("invoke_add", |b| {
        b.iter_batched(
            || {
                let stub = TransactionRequest::from_args(["add", "widget", "blue widget", "created", "Org1"])
                    .with_creator(creator.clone());
                (stub, InMemoryState::new())
            },
            |(stub, state)| chaincode.invoke(&stub, &state),
            BatchSize::SmallInput,
        )
    });
}

fn bench_invoke_query(c: &mut Criterion) {
    let chaincode = ProductChaincode::default();
    let creator = creator();
    let state = InMemoryState::new();
    let add = TransactionRequest::from_args(["add", "widget", "blue widget", "created", "Org1"])
        .with_creator(creator.clone());
    chaincode.invoke(&add, &state);

    let query = TransactionRequest::from_args(["query", "widget"]).with_creator(creator);
    c.bench_function("invoke_query", |b| {
        b.iter(|| chaincode.invoke(black_box(&query), &state))
    });
}

criterion_group!(
    benches,
    bench_extract_identity,
    bench_invoke_add,
    bench_invoke_query
);
criterion_main!(benches);
