use glam::{Vec2, Vec3};
use log::info;
use transform_hierarchy::{
    Constraint2D, Constraint3D, Hierarchy, HierarchySettings, Transform, Transform2D,
    Transform3D,
};

fn arm_demo(settings: &HierarchySettings) -> transform_hierarchy::Result<()> {
    info!("Building 3D arm...");

    let mut arm = Hierarchy::<Transform3D>::with_settings(settings);
    let shoulder = arm.push(None, Transform3D::IDENTITY)?;
    let elbow = arm
        .node()
        .with_parent(shoulder)
        .with_position(Vec3::new(10.0, 0.0, 0.0))
        .with_constraint(Constraint3D::default().with_position(Vec3::MIN, Vec3::new(12.0, 0.0, 0.0)))
        .spawn()?;
    let wrist = arm.push(Some(elbow), Transform3D::from_translation(Vec3::new(4.0, 0.0, 0.0)))?;

    info!("Elbow world position: {:?}", arm.global_position(elbow)?);

    arm.set_position(shoulder, Vec3::new(5.0, 0.0, 0.0))?;
    info!("Elbow after moving shoulder: {:?}", arm.global_position(elbow)?);

    arm.translate(elbow, Vec3::new(10.0, 0.0, 0.0))?;
    info!("Elbow local after clamped translate: {:?}", arm.local(elbow)?.translation);

    arm.orbit(elbow, 2, std::f32::consts::FRAC_PI_4)?;
    info!("Wrist world position after orbit: {:?}", arm.global_position(wrist)?);

    info!("Elbow constraint: {}", arm.constraint(elbow)?);
    arm.log_transforms();
    Ok(())
}

fn panel_demo(settings: &HierarchySettings) -> transform_hierarchy::Result<()> {
    info!("Building 2D panel...");

    let mut panel = Hierarchy::<Transform2D>::with_settings(settings);
    let frame = panel.push_str(None, "100 50 2 2 0")?;
    let button = panel.push(Some(frame), Transform2D::from_position(Vec2::new(10.0, 5.0)))?;

    let limits = Constraint2D::default()
        .with_position(Vec2::splat(-1.0), Vec2::splat(1.0))
        .with_rotation(0.0, 6.28)
        .with_scale(Vec2::splat(0.1), Vec2::splat(2.0));
    panel.set_constraint_str(button, &limits.to_string())?;

    panel.rotate(button, 2, 1.0)?;
    panel.constrain(button)?;
    info!("Button local: {}", panel.local(button)?);
    info!("Button world: {}", panel.global_pose(button)?);
    Ok(())
}

fn main() {
    transform_hierarchy::init_logging();

    let settings = HierarchySettings::load();

    if let Err(err) = arm_demo(&settings).and_then(|_| panel_demo(&settings)) {
        log::error!("Demo failed: {}", err);
    }

    info!("Demo complete");
}
