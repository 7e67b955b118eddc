use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use steamid::{Codec, FriendCode, InviteCode, Steam2, Steam3, Steam64, SteamId, decode_any};

// Number of IDs converted per benchmark iteration.
const TOTAL_IDS: usize = 4096;

fn ids() -> Vec<SteamId> {
    (1..=TOTAL_IDS as u32)
        .map(|i| SteamId::new(i.wrapping_mul(2_654_435_761)))
        .filter(SteamId::is_valid)
        .collect()
}

fn bench_codec<C>(c: &mut Criterion, group_name: &str)
where
    C: Codec,
    C::Encoded: ToString,
{
    let ids = ids();
    let encoded: Vec<String> = ids
        .iter()
        .filter_map(|id| C::encode(id).ok())
        .map(|e| e.to_string())
        .collect();

    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(ids.len() as u64));

    group.bench_function(format!("encode/{}", ids.len()), |b| {
        b.iter(|| {
            for id in &ids {
                black_box(C::encode(black_box(id)).ok());
            }
        });
    });

    group.bench_function(format!("decode/{}", encoded.len()), |b| {
        b.iter(|| {
            for s in &encoded {
                black_box(C::decode(black_box(s)).ok());
            }
        });
    });

    group.finish();
}

fn benchmark_steam64(c: &mut Criterion) {
    bench_codec::<Steam64>(c, "steam64");
}

fn benchmark_steam2(c: &mut Criterion) {
    bench_codec::<Steam2>(c, "steam2");
}

fn benchmark_steam3(c: &mut Criterion) {
    bench_codec::<Steam3>(c, "steam3");
}

fn benchmark_invite_code(c: &mut Criterion) {
    bench_codec::<InviteCode>(c, "invite_code");
}

fn benchmark_friend_code(c: &mut Criterion) {
    bench_codec::<FriendCode>(c, "friend_code");
}

fn renderings(id: &SteamId) -> [Option<String>; 3] {
    [
        id.to_steam3().ok(),
        id.to_friend_code().ok(),
        id.to_user_url().ok(),
    ]
}

fn benchmark_decode_any(c: &mut Criterion) {
    let inputs: Vec<String> = ids().iter().flat_map(renderings).flatten().collect();

    let mut group = c.benchmark_group("decode_any");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function(format!("elems/{}", inputs.len()), |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(decode_any(black_box(s)).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_steam64,
    benchmark_steam2,
    benchmark_steam3,
    benchmark_invite_code,
    benchmark_friend_code,
    benchmark_decode_any,
);
criterion_main!(benches);
