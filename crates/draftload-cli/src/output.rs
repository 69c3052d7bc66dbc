//! Output formatting module

use draftload_app::app::{RoutePlan, RouteStop};
use draftload_domain::service::{generate_summary_report, CameraMove, DraftSummary};
use draftload_types::{OutputFormat, Result};

pub fn output_summary(output_format: OutputFormat, summary: &DraftSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        println!("{}", content);
    } else {
        println!("{}", generate_summary_report(summary));
    }
    Ok(())
}

pub fn output_route(output_format: OutputFormat, plan: &RoutePlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nRoute");
    println!("=====");
    print_stop(&plan.pickup);
    print_stop(&plan.delivery);

    println!("\n--- Map ---");
    print_camera("Initial", &plan.initial_view);
    if plan.camera_moves.is_empty() {
        println!("No markers placed");
    }
    for marker in &plan.markers {
        println!(
            "Marker {:<9} {} at ({:.4}, {:.4})",
            format!("{:?}", marker.kind),
            marker.color,
            marker.position.longitude,
            marker.position.latitude
        );
    }
    for camera in &plan.camera_moves {
        print_camera("Then", camera);
    }
    println!("-----------");
    Ok(())
}

fn print_camera(step: &str, camera: &CameraMove) {
    match camera {
        CameraMove::FlyTo {
            center,
            zoom,
            duration_ms,
        } => println!(
            "{:<8} fly to ({:.4}, {:.4}) zoom {} over {} ms",
            step, center.longitude, center.latitude, zoom, duration_ms
        ),
        CameraMove::FitBounds {
            bounds,
            padding,
            duration_ms,
        } => println!(
            "{:<8} fit bounds ({:.4}, {:.4})-({:.4}, {:.4}) padding {} over {} ms",
            step,
            bounds.south_west.longitude,
            bounds.south_west.latitude,
            bounds.north_east.longitude,
            bounds.north_east.latitude,
            padding,
            duration_ms
        ),
    }
}

fn print_stop(stop: &RouteStop) {
    match &stop.details {
        Some(details) => println!(
            "{}  {:<7} {}",
            stop.kind.label(),
            stop.display_zip(),
            details.label()
        ),
        None => println!("{}  {:<7} (not found)", stop.kind.label(), stop.display_zip()),
    }
}
