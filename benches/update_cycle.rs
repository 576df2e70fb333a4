use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tvremote::{
    core::state::AppState,
    infrastructure::config::Config,
    integration::runtime::Runtime,
    model::television::{Message, Television},
    update, Msg, RawMsg,
};

const PRESSES: usize = 1_000;

fn televisions() -> Vec<Television> {
    vec![
        Television::new("Samsung", "X1000"),
        Television::new("LG", "OLED55"),
    ]
}

fn update_only(presses: usize) -> AppState {
    let mut state = AppState::new(televisions());
    for (i, message) in Message::ALL.iter().cycle().take(presses).enumerate() {
        let msg = Msg::Television {
            index: i % 2,
            message: *message,
        };
        state = update(msg, state).0;
    }
    state
}

fn through_runtime(state: AppState, presses: usize) -> AppState {
    let mut runtime = Runtime::new(state);
    let keys = [KeyCode::Up, KeyCode::Right, KeyCode::Tab, KeyCode::Down];
    for code in keys.iter().cycle().take(presses) {
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(*code, KeyModifiers::empty())));
    }
    runtime.process_all_messages();
    runtime.state().clone()
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("update", |b| b.iter(|| update_only(black_box(PRESSES))));

    let config = Config::defaults().unwrap_or_default();
    c.bench_function("runtime-keys", |b| {
        b.iter(|| {
            through_runtime(
                AppState::new_with_config(config.clone()),
                black_box(PRESSES),
            )
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
