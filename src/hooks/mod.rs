pub mod use_time_series;
