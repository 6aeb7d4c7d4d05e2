/////////////////////////////TESTS////////////////////////////////////////////////////
/*
tests:
single pieces (title, key, value, list, pair, section)
settings-shaped documents
template usage
comments and malformed input
*/

#[cfg(test)]
mod tests1 {
    use crate::Utils::task_parser::{
        DocumentMap, Value, filter_comments, parse_document, parse_document_as,
        parse_document_with_template, parse_key, parse_key_value_pair, parse_section, parse_title,
        parse_value, parse_value_list,
    };
    use std::collections::HashMap;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("tolerance\n interpolation: 0.005").unwrap();
        assert_eq!(title, "tolerance");
        assert_eq!(remaining, "interpolation: 0.005");

        let (remaining, title) = parse_title("root_finding max_iterations: 100").unwrap();
        assert_eq!(title, "root_finding");
        assert_eq!(remaining, "max_iterations: 100");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("max_iterations: 100").unwrap();
        assert_eq!(key, "max_iterations");
        assert_eq!(remaining, ": 100");
        assert!(parse_key("1abc: 2").is_err());
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("warn, next").unwrap();
        assert_eq!(value, Value::String("warn".to_string()));
        assert_eq!(remaining, ", next");

        let (_, value) = parse_value("200").unwrap();
        assert_eq!(value, Value::Integer(200));

        let (_, value) = parse_value("1e-10\n").unwrap();
        assert_eq!(value, Value::Float(1e-10));

        let (_, value) = parse_value("false").unwrap();
        assert_eq!(value, Value::Boolean(false));
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("0.005, 0.01\nnext").unwrap();
        assert_eq!(values, vec![Value::Float(0.005), Value::Float(0.01)]);
        assert_eq!(remaining, "\nnext");
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) =
            parse_key_value_pair("linear_system : 0.01 , 0.02\nroot_finding: 1, 2").unwrap();
        assert_eq!(key, "linear_system");
        assert_eq!(values, vec![Value::Float(0.01), Value::Float(0.02)]);
        assert_eq!(remaining, "root_finding: 1, 2");
    }

    #[test]
    fn test_parse_section_stops_at_next_title() {
        let input = "tolerance\ninterpolation: 0.005, 0.01\nintegration: 0.02, 0.01\nlogging\nloglevel: warn";
        let (remaining, (title, map)) = parse_section(input).unwrap();
        assert_eq!(title, "tolerance");
        assert_eq!(map.len(), 2);
        assert_eq!(map["integration"][0], Value::Float(0.02));
        assert_eq!(remaining, "logging\nloglevel: warn");
    }

    #[test]
    fn test_parse_settings_document() {
        let input = "tolerance\ninterpolation: 0.005, 0.01\nroot_finding\ntolerance: 1e-10\nmax_iterations: 100\nlogging\nloglevel: info";
        let (remaining, doc) = parse_document(input).unwrap();
        assert!(remaining.trim().is_empty());
        assert_eq!(doc.len(), 3);
        let root = &doc["root_finding"];
        assert_eq!(root["max_iterations"], Some(vec![Value::Integer(100)]));
        assert_eq!(root["tolerance"], Some(vec![Value::Float(1e-10)]));
        assert_eq!(
            doc["logging"]["loglevel"].as_ref().unwrap()[0].as_string(),
            Some(&"info".to_string())
        );
    }

    #[test]
    fn test_template_fills_missing_keys() {
        let mut template: DocumentMap = HashMap::new();
        let mut logging = HashMap::new();
        logging.insert("loglevel".to_string(), None);
        logging.insert("log_to_file".to_string(), None);
        template.insert("logging".to_string(), logging);
        template.insert("tolerance".to_string(), HashMap::new());

        let doc = parse_document_with_template("logging\nloglevel: debug", &template).unwrap();
        assert_eq!(doc["logging"]["log_to_file"], None);
        assert!(doc["logging"]["loglevel"].is_some());
        assert!(doc["tolerance"].is_empty());
    }

    #[test]
    fn test_comments_are_skipped() {
        let input = "# engine settings\nlogging\n// quiet run\nloglevel: error\n\n";
        assert_eq!(filter_comments(input), "logging\nloglevel: error");
        let doc = parse_document_as(input, None).unwrap();
        assert_eq!(
            doc["logging"]["loglevel"],
            Some(vec![Value::String("error".to_string())])
        );
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_document_as("", None).is_err());
        assert!(parse_document_as("logging\nloglevel warn", None).is_err());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(3).as_number(), Some(3.0));
        assert_eq!(Value::Float(0.5).as_number(), Some(0.5));
        assert_eq!(Value::Boolean(true).as_number(), None);
        assert_eq!(Value::Integer(7).as_integer(), Some(7));
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }
}
