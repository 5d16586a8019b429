// tests/playback_properties.rs
use auton_builder::{
    CommandLog, Motion, MotionOptions, PlaybackCursor, Pose, ProgramError, RobotConfig, StepView,
};

fn mixed_log() -> CommandLog {
    let mut log = CommandLog::new(RobotConfig::new(12.0, 15.0));
    log.set_pose((6.0, -30.0, 15.0));
    log.move_distance(24.0, MotionOptions::new());
    log.turn_to_point((-12.0, 0.0), MotionOptions::reversed());
    log.move_to_point((0.0, 24.0), MotionOptions::new().with_max_speed(90.0));
    log.add_text("intake.move(127);");
    log.move_distance(8.0, MotionOptions::reversed());
    log.delay(250);
    log.turn_to_heading(180.0, MotionOptions::new().with_early_exit_range(3.0));
    log
}

#[test]
fn every_step_starts_where_the_previous_ended() {
    let log = mixed_log();
    for i in 1..=log.len() {
        let previous = log.query_state(i - 1).unwrap();
        let current = log.query_state(i).unwrap();
        assert_eq!(current.before(), previous.after(), "chain broken at step {i}");
        assert_eq!(current.poses().len(), 2);
    }
}

#[test]
fn later_appends_do_not_change_earlier_steps() {
    let mut log = mixed_log();
    let recorded: Vec<Vec<Pose>> = (0..log.step_count())
        .map(|i| log.query_state(i).unwrap().poses())
        .collect();

    log.set_pose((0.0, 0.0, 0.0));
    log.move_to_point((48.0, 48.0), MotionOptions::reversed());

    for (i, poses) in recorded.iter().enumerate() {
        assert_eq!(&log.query_state(i).unwrap().poses(), poses);
    }
}

#[test]
fn rendering_is_prefix_stable() {
    let mut log = CommandLog::default();
    let motions = [
        Motion::SetPose(Pose::new(0.0, -20.0, 0.0)),
        Motion::MoveDistance {
            distance: 10.0,
            options: MotionOptions::reversed(),
        },
        Motion::Text("// park".to_string()),
        Motion::Delay { millis: 1000 },
    ];
    for motion in motions {
        let before = log.render_program();
        log.append(motion);
        let added = log.commands().last().unwrap().to_string();
        assert_eq!(log.render_program(), before + &added);
    }
    assert_eq!(
        log.render_program(),
        "SetPose(0, -20, 0);\nMoveDistance(-10, { .reversed = true, });\n// park\npros::delay(1000);\n"
    );
}

#[test]
fn each_text_step_gets_its_own_line_break() {
    let mut log = CommandLog::default();
    log.add_text("// a\n");
    log.add_text("");
    log.move_to_point((0.0, 0.0), MotionOptions::reversed());

    assert_eq!(
        log.render_program(),
        "// a\n\n\nMoveToPoint(0, 0, { .reversed = true, });\n"
    );
    assert_eq!(log.current_tail_state(), Pose::new(0.0, 0.0, 180.0));
}

#[test]
fn text_steps_are_pose_neutral() {
    let log = mixed_log();
    for cmd in log.commands().iter().filter(|c| c.is_text()) {
        assert_eq!(cmd.start_pose(), cmd.end_pose());
    }
    assert_eq!(log.commands().iter().filter(|c| c.is_text()).count(), 2);
}

#[test]
fn options_render_into_statements() {
    let program = mixed_log().render_program();
    assert!(program.contains("TurnToPoint(-12, 0, { .reversed = true, });\n"));
    assert!(program.contains("MoveToPoint(0, 24, { .maxSpeed = 90, });\n"));
    assert!(program.contains("TurnToHeading(180, { .earlyExitRange = 3, });\n"));
}

#[test]
fn viewer_walks_the_whole_routine() {
    let log = mixed_log();
    let mut cursor = PlaybackCursor::for_log(&log);
    assert_eq!(log.footprint().width, 12.0);
    assert_eq!(log.footprint().height, 15.0);

    for _ in 0..log.step_count() {
        let view = StepView::at(&log, &cursor).unwrap();
        assert!(!view.ghosts.is_empty());
        cursor.step_forward();
    }
    assert_eq!(cursor.position(), 0);

    let err = log.query_state(log.step_count()).unwrap_err();
    assert_eq!(
        err,
        ProgramError::StepOutOfRange {
            index: log.step_count(),
            steps: log.step_count(),
        }
    );
}

#[test]
fn log_exports_as_json() {
    let mut log = CommandLog::new(RobotConfig::new(10.0, 10.0));
    log.set_pose((0.0, -20.0, 0.0));
    log.move_distance(5.0, MotionOptions::new());

    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(value["config"]["width"], 10.0);
    let commands = value["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0]["motion"]["SetPose"]["y"], -20.0);
    assert_eq!(commands[1]["start_pose"]["y"], -20.0);
    assert_eq!(commands[1]["end_pose"]["y"], -15.0);

    let pose: Pose = serde_json::from_value(commands[1]["end_pose"].clone()).unwrap();
    assert_eq!(pose, log.current_tail_state());
}
