#![allow(missing_docs, dead_code)]

pub const QUIZ: &str = r#"
{
    "quiz": {
        "sport": {
            "q1": {
                "question": "Which one is correct team name in NBA?",
                "options": [
                    "New York Bulls",
                    "Los Angeles Kings",
                    "Golden State Warriros",
                    "Huston Rocket"
                ],
                "answer": "Huston Rocket"
            }
        },
        "maths": {
            "q1": {
                "question": "5 + 7 = ?",
                "options": [
                    "10",
                    "11",
                    "12",
                    "13"
                ],
                "answer": "12"
            },
            "q2": {
                "question": "12 - 8 = ?",
                "options": [
                    "1",
                    "2",
                    "3",
                    "4"
                ],
                "answer": "4"
            }
        }
    }
}
"#;

pub const MIXED: &str = r#"
[
    {"type": "function", "name": "main", "line": 1, "public": true},
    {"type": "macro", "name": "println", "line": 2, "public": false},
    ["nested", ["deeper", []]],
    'single "quoted"',
    null,
    -0.5
]
"#;
