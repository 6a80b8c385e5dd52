fn main() {
    pt_grid_dashboard::render_time_series();
}
