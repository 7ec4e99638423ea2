//! Integration tests

use envbind::{apply, with_error_on_missing, CoerceError, EnvConfig, EnvError};
use serial_test::serial;
use std::env;
use std::time::Duration;

macro_rules! assert_default_binds {
    ($name:ident, $ty:ty, $var:literal, $default:literal, $expected:expr) => {
        #[test]
        #[serial]
        fn $name() {
            #[derive(Debug, Default, EnvConfig)]
            struct Stuff {
                #[env(name = $var, default = $default)]
                value: $ty,
            }

            env::remove_var($var);
            let mut stuff = Stuff::default();
            apply(&mut stuff, &[]).unwrap();
            assert_eq!(stuff.value, $expected);
        }
    };
}

assert_default_binds!(test_isize, isize, "EC_INTERVAL", "100", 100);
assert_default_binds!(test_i64, i64, "EC_INTERVAL", "100", 100);
assert_default_binds!(test_i32, i32, "EC_INTERVAL", "100", 100);
assert_default_binds!(test_i16, i16, "EC_INTERVAL", "100", 100);
assert_default_binds!(test_i8, i8, "EC_INTERVAL", "100", 100);
assert_default_binds!(test_f64, f64, "EC_INTERVAL", "10.3", 10.3);
assert_default_binds!(test_f32, f32, "EC_INTERVAL", "10.3", 10.3f32);
assert_default_binds!(test_string, String, "EC_NAME", "hello", "hello");

assert_default_binds!(test_bool_true_t, bool, "EC_ENABLE", "t", true);
assert_default_binds!(test_bool_true_mixed_case, bool, "EC_ENABLE", "tRue", true);
assert_default_binds!(test_bool_true_1, bool, "EC_ENABLE", "1", true);
assert_default_binds!(test_bool_false_f, bool, "EC_ENABLE", "F", false);
assert_default_binds!(test_bool_false_false, bool, "EC_ENABLE", "False", false);
assert_default_binds!(test_bool_false_0, bool, "EC_ENABLE", "0", false);

const HOUR: Duration = Duration::from_secs(3600);

assert_default_binds!(test_duration_week, Duration, "EC_LENGTH", "3w", HOUR * 24 * 7 * 3);
assert_default_binds!(test_duration_day, Duration, "EC_LENGTH", "2d", HOUR * 24 * 2);
assert_default_binds!(test_duration_hour, Duration, "EC_LENGTH", "2h", HOUR * 2);
assert_default_binds!(test_duration_minute, Duration, "EC_LENGTH", "2m", Duration::from_secs(120));
assert_default_binds!(test_duration_second, Duration, "EC_LENGTH", "2s", Duration::from_secs(2));
assert_default_binds!(test_duration_millisecond, Duration, "EC_LENGTH", "2ms", Duration::from_millis(2));
assert_default_binds!(test_duration_microsecond, Duration, "EC_LENGTH", "2us", Duration::from_micros(2));
assert_default_binds!(test_duration_nanosecond, Duration, "EC_LENGTH", "2ns", Duration::from_nanos(2));

assert_default_binds!(
    test_byte_buffer,
    Vec<u8>,
    "EC_SOME_ENCODED_STRING",
    "c2lsbHkgd2FiYml0",
    b"silly wabbit".to_vec()
);

#[test]
#[serial]
fn test_bool_invalid() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_ENABLE", default = "boof")]
        enabled: bool,
    }

    env::remove_var("EC_ENABLE");
    let result = Stuff::from_env();
    assert!(matches!(
        result,
        Err(EnvError::Parse {
            source: CoerceError::Bool,
            ..
        })
    ));
}

#[derive(Debug, Default, EnvConfig)]
struct NoDefault {
    #[env(name = "EC_SOMETHING")]
    pub something: String,
}

#[test]
#[serial]
fn test_no_default_with_error_on_missing() {
    env::remove_var("EC_SOMETHING");

    let mut config = NoDefault::default();
    let err = apply(&mut config, &[with_error_on_missing()]).unwrap_err();
    assert!(matches!(&err, EnvError::Missing { name } if name == "EC_SOMETHING"));
    assert_eq!(err.variable_name(), Some("EC_SOMETHING"));
}

#[test]
#[serial]
fn test_no_default_without_option_leaves_field_unbound() {
    env::remove_var("EC_SOMETHING");

    let config = NoDefault::from_env().unwrap();
    assert_eq!(config.something, "");
}

#[test]
#[serial]
fn test_no_default_has_value() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "APP_TEST_NAME")]
        test_name: String,
    }

    env::set_var("APP_TEST_NAME", "hello");

    let config = Stuff::from_env_with(&[with_error_on_missing()]).unwrap();
    assert_eq!(config.test_name, "hello");

    env::remove_var("APP_TEST_NAME");
}

#[test]
#[serial]
fn test_environment_overrides_default() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_INTERVAL", default = "100")]
        interval: i32,
    }

    env::set_var("EC_INTERVAL", "42");
    assert_eq!(Stuff::from_env().unwrap().interval, 42);

    env::set_var("EC_INTERVAL", "");
    assert_eq!(Stuff::from_env().unwrap().interval, 100);

    env::remove_var("EC_INTERVAL");
}

#[derive(Debug, Default, Clone, PartialEq, EnvConfig)]
struct Service {
    #[env(name = "EC_SVC_NAME", default = "svc")]
    pub name: String,

    #[env(name = "EC_SVC_TIMEOUT", default = "15s")]
    pub timeout: Duration,

    #[env(name = "EC_SVC_TOKEN")]
    pub token: String,

    #[env(name = "EC_SVC_WORKERS", default = "4")]
    pub workers: i32,

    // No binding metadata; never examined
    pub cache: std::collections::HashMap<String, String>,
}

#[test]
#[serial]
fn test_fail_fast_keeps_earlier_fields() {
    env::remove_var("EC_SVC_NAME");
    env::remove_var("EC_SVC_TIMEOUT");
    env::remove_var("EC_SVC_TOKEN");
    env::remove_var("EC_SVC_WORKERS");

    let mut service = Service::default();
    let err = apply(&mut service, &[with_error_on_missing()]).unwrap_err();

    assert!(matches!(&err, EnvError::Missing { name } if name == "EC_SVC_TOKEN"));
    assert_eq!(service.name, "svc");
    assert_eq!(service.timeout, Duration::from_secs(15));
    assert_eq!(service.workers, 0);
}

#[test]
#[serial]
fn test_parse_error_stops_pass() {
    env::set_var("EC_SVC_TIMEOUT", "15 seconds");
    env::set_var("EC_SVC_TOKEN", "abc");

    let mut service = Service::default();
    let err = apply(&mut service, &[]).unwrap_err();

    assert!(matches!(
        &err,
        EnvError::Parse { name, source: CoerceError::DurationUnit { .. } } if name == "EC_SVC_TIMEOUT"
    ));
    assert!(err.to_string().contains("EC_SVC_TIMEOUT"));
    assert_eq!(service.name, "svc");
    assert_eq!(service.token, "");

    env::remove_var("EC_SVC_TIMEOUT");
    env::remove_var("EC_SVC_TOKEN");
}

#[test]
#[serial]
fn test_apply_is_repeatable() {
    env::set_var("EC_SVC_TOKEN", "abc");

    let first = Service::from_env().unwrap();
    let second = Service::from_env().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.workers, 4);

    env::remove_var("EC_SVC_TOKEN");
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_value_is_not_replaced_by_default() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_CAFE_NAME", default = "fallback")]
        name: String,
    }

    env::set_var("EC_CAFE_NAME", OsStr::from_bytes(b"caf\xe9"));

    let err = Stuff::from_env().unwrap_err();
    assert!(matches!(&err, EnvError::NotUnicode { name, .. } if name == "EC_CAFE_NAME"));
    assert_eq!(err.variable_name(), Some("EC_CAFE_NAME"));

    env::remove_var("EC_CAFE_NAME");
}

#[test]
#[serial]
fn test_integer_overflow_fails() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_SMALL", default = "300")]
        small: i8,
    }

    env::remove_var("EC_SMALL");
    let err = Stuff::from_env().unwrap_err();
    assert!(matches!(
        err,
        EnvError::Parse {
            source: CoerceError::Int(_),
            ..
        }
    ));
}

#[test]
#[serial]
fn test_duration_overflow_fails() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_LENGTH", default = "100000w")]
        length: Duration,
    }

    env::remove_var("EC_LENGTH");
    let err = Stuff::from_env().unwrap_err();
    assert!(matches!(
        err,
        EnvError::Parse {
            source: CoerceError::DurationOverflow { .. },
            ..
        }
    ));
}

#[test]
#[serial]
fn test_unsupported_field_type() {
    #[derive(Debug, Default, EnvConfig)]
    struct Stuff {
        #[env(name = "EC_TAGS", default = "a,b")]
        tags: Vec<String>,
    }

    env::remove_var("EC_TAGS");
    let err = Stuff::from_env().unwrap_err();
    assert!(matches!(&err, EnvError::Unsupported { name, .. } if name == "EC_TAGS"));
}

#[test]
#[serial]
fn test_inferred_names_and_prefix() {
    #[derive(Debug, Default, EnvConfig)]
    #[env(prefix = "MYAPP_")]
    struct Stuff {
        #[env]
        database_url: String,

        #[env(name = "LISTEN_PORT", default = "8080")]
        port: i32,
    }

    env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    env::remove_var("MYAPP_LISTEN_PORT");

    let config = Stuff::from_env().unwrap();
    assert_eq!(config.database_url, "postgres://localhost/db");
    assert_eq!(config.port, 8080);

    env::remove_var("MYAPP_DATABASE_URL");
}

#[derive(Debug, EnvConfig)]
#[allow(dead_code)]
enum NotAStruct {
    A,
    B,
}

#[derive(Debug, Default, EnvConfig)]
struct Tuple(#[allow(dead_code)] i32);

#[test]
fn test_bad_targets() {
    let err = apply(&mut NotAStruct::A, &[]).unwrap_err();
    assert!(matches!(err, EnvError::BadTarget { .. }));

    let err = Tuple::from_env().unwrap_err();
    assert!(matches!(err, EnvError::BadTarget { type_name, .. } if type_name.contains("Tuple")));
}

#[derive(Debug, Default, EnvConfig)]
struct Empty;

#[test]
fn test_unit_struct_binds_nothing() {
    assert!(Empty::from_env().is_ok());
}
