mod harness;

use harness::fixtures::{column_with_default, email_column, id_column, users_table};
use harness::{render_column, render_table};

use mwb_doctrine::app::column_renderer::RenderError;
use mwb_doctrine::app::config::{FormatterConfig, QuoteStrategy};
use mwb_doctrine::app::ports::ConvertError;
use mwb_doctrine::domain::{Column, UNSET};

fn property_line(declaration: &str) -> &str {
    declaration
        .lines()
        .find(|l| l.starts_with("protected $"))
        .unwrap()
}

#[test]
fn nullable_email_column() {
    let table = users_table(vec![]);
    let rendered = render_column(&table, &email_column(), &FormatterConfig::default());

    insta::assert_snapshot!(rendered.declaration, @r#"
    /**
     * @ORM\Column(type="string", length=255, nullable=true)
     */
    protected $email;
    "#);

    insta::assert_snapshot!(rendered.accessors, @r#"
    /**
     * Set the value of email.
     *
     * @param string $email
     *
     * @return \App\Entity\User
     */
    public function setEmail($email = null)
    {
        $this->email = $email;

        return $this;
    }

    /**
     * Get the value of email.
     *
     * @return string
     */
    public function getEmail(): ?string
    {
        return $this->email;
    }
    "#);

    assert_eq!(
        rendered.log,
        vec!["  Writing setter/getter for column \"email\"".to_string()]
    );
}

#[test]
fn auto_increment_primary_key() {
    let table = users_table(vec![]);
    let config = FormatterConfig {
        generated_value_strategy: "identity".to_string(),
        ..Default::default()
    };
    let rendered = render_column(&table, &id_column(), &config);

    insta::assert_snapshot!(rendered.declaration, @r#"
    /**
     * @ORM\Id
     * @ORM\Column(type="integer", options={"unsigned"=true})
     * @ORM\GeneratedValue(strategy="IDENTITY")
     */
    protected $id;
    "#);

    insta::assert_snapshot!(rendered.accessors, @r#"
    /**
     * Get the value of id.
     *
     * @return integer
     */
    public function getId(): int
    {
        return $this->id;
    }
    "#);
}

#[test]
fn entity_body_orders_declarations_before_accessors() {
    let table = users_table(vec![id_column(), email_column()]);

    let body = render_table(&table, &FormatterConfig::default()).unwrap();

    insta::assert_snapshot!(body, @r#"
    /**
     * @ORM\Id
     * @ORM\Column(type="integer", options={"unsigned"=true})
     * @ORM\GeneratedValue(strategy="AUTO")
     */
    protected $id;

    /**
     * @ORM\Column(type="string", length=255, nullable=true)
     */
    protected $email;


    /**
     * Get the value of id.
     *
     * @return integer
     */
    public function getId(): int
    {
        return $this->id;
    }

    /**
     * Set the value of email.
     *
     * @param string $email
     *
     * @return \App\Entity\User
     */
    public function setEmail($email = null)
    {
        $this->email = $email;

        return $this;
    }

    /**
     * Get the value of email.
     *
     * @return string
     */
    public function getEmail(): ?string
    {
        return $this->email;
    }
    "#);
}

#[test]
fn boolean_defaults_render_as_literals() {
    let table = users_table(vec![]);
    let config = FormatterConfig::default();

    let truthy = render_column(&table, &column_with_default("active", "TINYINT(1)", Some("1")), &config);
    let falsy = render_column(&table, &column_with_default("active", "TINYINT(1)", Some("0")), &config);
    let unset = render_column(&table, &column_with_default("active", "TINYINT(1)", None), &config);

    assert_eq!(property_line(&truthy.declaration), "protected $active = true;");
    assert_eq!(property_line(&falsy.declaration), "protected $active = false;");
    assert_eq!(property_line(&unset.declaration), "protected $active;");
    assert!(
        truthy
            .accessors
            .contains("    $this->active = (boolean) $active;")
    );
    assert!(truthy.accessors.contains("public function getActive(): bool"));
}

#[test]
fn json_default_loses_one_pair_of_quotes() {
    let table = users_table(vec![]);
    let rendered = render_column(
        &table,
        &column_with_default("roles", "JSON", Some("'[\"ROLE_USER\"]'")),
        &FormatterConfig::default(),
    );

    assert!(rendered.declaration.contains("@ORM\\Column(type=\"json_array\")"));
    assert_eq!(
        property_line(&rendered.declaration),
        "protected $roles = [\"ROLE_USER\"];"
    );
}

#[test]
fn decimal_default_gains_fraction_and_keeps_precision() {
    let table = users_table(vec![]);
    let mut price = column_with_default("price", "DECIMAL", Some("5"));
    price.parameters.precision = Some(10);
    price.parameters.scale = Some(2);
    price.parameters.length = Some(UNSET);

    let rendered = render_column(&table, &price, &FormatterConfig::default());

    assert!(
        rendered
            .declaration
            .contains("@ORM\\Column(type=\"decimal\", precision=10, scale=2)")
    );
    assert_eq!(property_line(&rendered.declaration), "protected $price = 5.0;");
    assert!(rendered.accessors.contains("    $this->price = (float) $price;"));
}

#[test]
fn reserved_word_column_gets_quoted_name() {
    let table = users_table(vec![]);
    let rendered = render_column(&table, &Column::new("order", "INT"), &FormatterConfig::default());

    assert!(
        rendered
            .declaration
            .contains("@ORM\\Column(name=\"`order`\", type=\"integer\")")
    );

    let unquoted = FormatterConfig {
        quote_identifier_strategy: QuoteStrategy::None,
        ..Default::default()
    };
    let rendered = render_column(&table, &Column::new("order", "INT"), &unquoted);
    assert!(rendered.declaration.contains("@ORM\\Column(type=\"integer\")"));
}

#[test]
fn datetime_setter_is_type_hinted_when_enabled() {
    let table = users_table(vec![]);
    let mut created_at = Column::new("created_at", "DATETIME");
    created_at.nullable = true;
    let config = FormatterConfig {
        property_typehint: true,
        ..Default::default()
    };

    let rendered = render_column(&table, &created_at, &config);

    assert!(
        rendered
            .accessors
            .contains("public function setCreatedAt(\\DateTime $created_at = null)")
    );
    assert!(rendered.accessors.contains(" * @param \\DateTime $created_at"));
    assert!(
        rendered
            .accessors
            .contains("public function getCreatedAt(): ?\\DateTime")
    );
}

#[test]
fn ignored_column_renders_nothing() {
    let table = users_table(vec![]);
    let mut column = email_column();
    column.is_ignored = true;

    let rendered = render_column(&table, &column, &FormatterConfig::default());

    assert!(rendered.declaration.is_empty());
    assert!(rendered.accessors.is_empty());
    assert!(rendered.log.is_empty());
}

#[test]
fn unknown_raw_type_fails_the_table() {
    let table = users_table(vec![id_column(), Column::new("area", "POLYGON")]);

    let result = render_table(&table, &FormatterConfig::default());

    assert!(matches!(
        result,
        Err(RenderError::Convert(ConvertError::UnknownRawType { ref column, .. })) if column == "area"
    ));
}
