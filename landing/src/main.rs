// OptimizedLanding - Leptos 0.8 CSR entry

fn main() {
    optimized_landing::start();
}
