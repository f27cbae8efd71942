//! The fixture corpus.
//!
//! Each entry pairs a unique fixture name with its [`SchemaFixture`]
//! record. The registry in [`crate::catalog`] is built from this table at
//! first access.

use fixture_types::{PlatformFlags, VersionFlags};

use crate::record::SchemaFixture;

/// Cyclic-relationship schemas work through the plain API on every client
/// but are rejected once DataStore or the studio editor is involved.
const API_ONLY_CLIENTS: PlatformFlags = PlatformFlags::API
    .union(PlatformFlags::JS)
    .union(PlatformFlags::IOS)
    .union(PlatformFlags::ANDROID)
    .union(PlatformFlags::FLUTTER);

pub(crate) const FIXTURES: &[(&str, SchemaFixture)] = &[
    (
        "@model-simple",
        SchemaFixture {
            description: "Simple @model schema",
            supported_versions: VersionFlags::ALL,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Todo @model {
                  id: ID!
                  name: String!
                }
            "#,
        },
    ),
    (
        "v2-primary-key-with-composite-sort-key",
        SchemaFixture {
            description: "@primaryKey with a composite sort key",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Test @model {
                  email: String! @primaryKey(sortKeyFields: ["kind", "other"])
                  kind: Int!
                  other: AWSDateTime!
                  yetAnother: String
                  andAnother: String!
                }
            "#,
        },
    ),
    (
        "v2-index-with-queryfield",
        SchemaFixture {
            description: "@index with queryField",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Test @model {
                  email: String!
                  createdAt: AWSDateTime!
                  category: String! @index(name: "CategoryGSI", sortKeyFields: "createdAt", queryField: "testsByCategory")
                  description: String
                }
            "#,
        },
    ),
    (
        "v2-recursive-has-one-dependency",
        SchemaFixture {
            description: "Recursive @hasOne relationship",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Item @model {
                  id: ID!
                  item: Item @hasOne
                }
            "#,
        },
    ),
    (
        "v2-recursive-has-many-dependency",
        SchemaFixture {
            description: "Recursive @hasMany relationship",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Item @model {
                  id: ID!
                  items: [Item] @hasMany
                }
            "#,
        },
    ),
    (
        "v2-cyclic-has-one-dependency",
        SchemaFixture {
            description: "Cyclic @hasOne dependency between two models",
            supported_versions: VersionFlags::V2,
            supported_platforms: API_ONLY_CLIENTS,
            sdl: r#"
                type Blog @model {
                  id: ID!
                  posts: Post @hasOne
                }
                type Post @model {
                  id: ID!
                  blog: Blog @hasOne
                }
            "#,
        },
    ),
    (
        "v2-cyclic-has-many-dependency",
        SchemaFixture {
            description: "Cyclic @hasMany dependency between two models",
            supported_versions: VersionFlags::V2,
            supported_platforms: API_ONLY_CLIENTS,
            sdl: r#"
                type Blog @model {
                  id: ID!
                  posts: [Post] @hasMany
                }
                type Post @model {
                  id: ID!
                  blog: [Blog] @hasMany
                }
            "#,
        },
    ),
    (
        "@default-string-value",
        SchemaFixture {
            description: "@default sets a default value for a string field",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Todo @model {
                  content: String @default(value: "My new Todo")
                }
            "#,
        },
    ),
    (
        "@hasOne-implicit-fields",
        SchemaFixture {
            description: "@hasOne with implicit fields parameter",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Project @model {
                  id: ID!
                  name: String
                  team: Team @hasOne
                }

                type Team @model {
                  id: ID!
                  name: String!
                }
            "#,
        },
    ),
    (
        "@hasOne-explicit-fields",
        SchemaFixture {
            description: "@hasOne with explicit fields parameter",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Project @model {
                  id: ID!
                  name: String
                  teamID: ID
                  team: Team @hasOne(fields: ["teamID"])
                }

                type Team @model {
                  id: ID!
                  name: String!
                }
            "#,
        },
    ),
    (
        "@hasOne-implicit-and-explicit-fields",
        SchemaFixture {
            description: "@hasOne with both implicit and explicit fields",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type HasOneParent @model {
                  id: ID!
                  name: String
                  implicitChild: HasOneChild @hasOne
                  explicitChildID: ID
                  explicitChild: HasOneChild @hasOne(fields: ["explicitChildID"])
                }

                type HasOneChild @model {
                  id: ID!
                  name: String
                }
            "#,
        },
    ),
    (
        "@hasMany-implicit-parameters",
        SchemaFixture {
            description: "@hasMany with implicit parameters",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Post @model {
                  id: ID!
                  title: String!
                  comments: [Comment] @hasMany
                }

                type Comment @model {
                  id: ID!
                  content: String!
                }
            "#,
        },
    ),
    (
        "@hasMany-explicit-parameters",
        SchemaFixture {
            description: "@hasMany with explicit parameters",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Post @model {
                  id: ID!
                  title: String!
                  comments: [Comment] @hasMany(indexName: "byPost", fields: ["id"])
                }

                type Comment @model {
                  id: ID!
                  postID: ID! @index(name: "byPost", sortKeyFields: ["content"])
                  content: String!
                }
            "#,
        },
    ),
    (
        "@hasMany-implicit-and-explicit-parameters",
        SchemaFixture {
            description: "@hasMany with both implicit and explicit parameters",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type HasManyParent @model {
                  id: ID!
                  name: String
                  implicitChildren: [HasManyChildImplicit] @hasMany
                  explicitChildren: [HasManyChildExplicit] @hasMany(indexName: "byHasManyParent", fields: ["id"])
                }

                type HasManyChildImplicit @model {
                  id: ID!
                  name: String
                }

                type HasManyChildExplicit @model {
                  id: ID!
                  name: String
                  hasManyParentID: ID! @index(name: "byHasManyParent", sortKeyFields: ["name"])
                }
            "#,
        },
    ),
    (
        "@hasOne-with-@belongsTo-with-implicit-parameters",
        SchemaFixture {
            description: "@belongsTo with implicit parameters referencing @hasOne",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Project @model {
                  id: ID!
                  name: String
                  team: Team @hasOne
                }

                type Team @model {
                  id: ID!
                  name: String!
                  project: Project @belongsTo
                }
            "#,
        },
    ),
    (
        "@hasOne-with-@belongsTo-with-explicit-parameters",
        SchemaFixture {
            description: "@belongsTo with explicit parameters referencing @hasOne",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Project @model {
                  id: ID!
                  name: String
                  team: Team @hasOne
                }

                type Team @model {
                  id: ID!
                  name: String!
                  projectID: ID
                  project: Project @belongsTo(fields: ["projectID"])
                }
            "#,
        },
    ),
    (
        "@hasMany-with-@belongsTo-with-implicit-parameters",
        SchemaFixture {
            description: "@belongsTo with implicit parameters referencing @hasMany",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Post @model {
                  id: ID!
                  title: String!
                  comments: [Comment] @hasMany(indexName: "byPost", fields: ["id"])
                }

                type Comment @model {
                  id: ID!
                  postID: ID! @index(name: "byPost", sortKeyFields: ["content"])
                  content: String!
                  post: Post @belongsTo
                }
            "#,
        },
    ),
    (
        "@hasMany-with-@belongsTo-with-explicit-parameters",
        SchemaFixture {
            description: "@belongsTo with explicit parameters referencing @hasMany",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Post @model {
                  id: ID!
                  title: String!
                  comments: [Comment] @hasMany(indexName: "byPost", fields: ["id"])
                }

                type Comment @model {
                  id: ID!
                  postID: ID! @index(name: "byPost", sortKeyFields: ["content"])
                  content: String!
                  post: Post @belongsTo(fields: ["postID"])
                }
            "#,
        },
    ),
    (
        "@hasMany-with-implicit-parameters-with-@belongsTo-with-implicit-parameters",
        SchemaFixture {
            description: "@belongsTo with implicit parameters referencing @hasMany with implicit parameters",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL.difference(PlatformFlags::STUDIO),
            sdl: r#"
                type Post @model {
                  id: ID!
                  title: String!
                  comments: [Comment] @hasMany
                }

                type Comment @model {
                  id: ID!
                  content: String!
                  post: Post @belongsTo
                }
            "#,
        },
    ),
    (
        "@manyToMany",
        SchemaFixture {
            description: "basic @manyToMany usage",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Post5V2 @model {
                  id: ID!
                  title: String!
                  editors: [User5V2] @manyToMany(relationName: "PostEditor5V2")
                }

                type User5V2 @model {
                  id: ID!
                  username: String!
                  posts: [Post5V2] @manyToMany(relationName: "PostEditor5V2")
                }
            "#,
        },
    ),
    (
        "multiple-@belongsTo-on-same-type",
        SchemaFixture {
            description: "multiple @belongsTo directives on same model",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type Meeting8V2 @model {
                  id: ID!
                  title: String!
                  attendees: [Registration8V2] @hasMany(indexName: "byMeeting", fields: ["id"])
                }

                type Attendee8V2 @model {
                  id: ID!
                  meetings: [Registration8V2] @hasMany(indexName: "byAttendee", fields: ["id"])
                }

                type Registration8V2 @model {
                  id: ID!
                  meetingId: ID @index(name: "byMeeting", sortKeyFields: ["attendeeId"])
                  meeting: Meeting8V2! @belongsTo(fields: ["meetingId"])
                  attendeeId: ID @index(name: "byAttendee", sortKeyFields: ["meetingId"])
                  attendee: Attendee8V2! @belongsTo(fields: ["attendeeId"])
                }
            "#,
        },
    ),
    (
        "custom-@primaryKey-with-sort-fields",
        SchemaFixture {
            description: "custom @primaryKey with sortKeyFields",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type CustomerWithMultipleFieldsinPK @model {
                  id: ID! @primaryKey(sortKeyFields: ["dob", "date", "time", "phoneNumber", "height"])
                  dob: AWSDateTime!
                  date: AWSDate!
                  time: AWSTime!
                  phoneNumber: Int!
                  height: Float!
                  firstName: String
                  lastName: String
                }
            "#,
        },
    ),
    (
        "@model-with-appsync-scalars",
        SchemaFixture {
            description: "@model using AppSync scalar types",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type ModelWithAppsyncScalarTypes @model {
                  id: ID!
                  stringValue: String
                  altStringValue: String
                  listOfStringValue: [String]
                  intValue: Int
                  altIntValue: Int
                  listOfIntValue: [Int]
                  floatValue: Float
                  listOfFloatValue: [Float]
                  booleanValue: Boolean
                  listOfBooleanValue: [Boolean]
                  awsDateValue: AWSDate
                  listOfAWSDataValue: [AWSDate]
                  awsTimeValue: AWSTime
                  listOfAWSTimeValue: [AWSTime]
                  awsDateTimeValue: AWSDateTime
                  listOfAWSDateTimeValue: [AWSDateTime]
                  awsTimestampValue: AWSTimestamp
                  listOfAWSTimestampValue: [AWSTimestamp]
                  awsEmailValue: AWSEmail
                  listOfAWSEmailValue: [AWSEmail]
                  awsJsonValue: AWSJSON
                  listOfAWSJsonValue: [AWSJSON]
                  awsPhoneValue: AWSPhone
                  listOfAWSPhoneValue: [AWSPhone]
                  awsURLValue: AWSURL
                  listOfAWSURLValue: [AWSURL]
                  awsIPAddressValue: AWSIPAddress
                  listOfAWSIPAddressValue: [AWSIPAddress]
                }
            "#,
        },
    ),
    (
        "@model-with-enums",
        SchemaFixture {
            description: "@model using enums",
            supported_versions: VersionFlags::V2,
            supported_platforms: PlatformFlags::ALL,
            sdl: r#"
                type ModelWithEnum @model {
                  id: ID!
                  enumField: EnumField
                  listOfEnumField: [EnumField]
                }

                enum EnumField {
                  yes
                  no
                }
            "#,
        },
    ),
];
