/// Runs `$block`, and with `DF.log_performance` on, warns when it overruns `$budget_micros`.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $budget_micros:expr, $block:block) => {{
        if !$crate::config::DF.log_performance {
            $block
        } else {
            let started = $crate::utils::AppInstant::now();
            let out = $block;
            let elapsed = started.elapsed();
            if elapsed.as_micros() > $budget_micros {
                log::warn!(
                    "SLOW [{}]: '{}' took {:.3}ms over a {:.3}ms budget",
                    if cfg!(debug_assertions) { "debug" } else { "release" },
                    $name,
                    elapsed.as_secs_f64() * 1000.0,
                    $budget_micros as f64 / 1000.0
                );
            }
            out
        }
    }};
}
