/*!

This is the long-form manual for `justicia_records` and `justiciapedia`.

## Source files

Each dataset is one spreadsheet, exported as comma-separated text or read
directly from an Excel workbook (`.xlsx`). The first non-blank line holds the
column names. Names are case-sensitive. Columns that are not listed below are
ignored, and listed columns that are missing are treated as blank.

Fields may be quoted with `"`; a comma inside quotes does not split the field
and `""` inside quotes is a literal quote. Spaces around each field are removed.

A line with fewer fields than there are column names is skipped. It still
counts as a line for the generated ids described below.

### Candidates

| column | field | when blank |
|---|---|---|
| `id` | `id` | `candidate-<line>` |
| `nombre` | `name` | |
| `cargo` | `role` | `Aspirante` |
| `institucion` | `institution` | |
| `imagen` | `imageUrl` | placeholder image |
| `estado` | `status` | `Activo` |
| `anosexperiencia` | `yearsOfExperience` | `0` |
| `descripcion` | `description` | |
| `experienciaacademica` | `education`, `academicExperience` | no education entry |
| `experienciaprofesional` | `experience`, `professionalExperience` | one entry built from `cargo`, `institucion` and `descripcion` |
| `correo` | `email` | |
| `telefono` | `phone` | |

`estado` only recognizes `Activo` and `Inactivo`, written exactly so. Any other
value reads as `Activo`.

`anosexperiencia` reads the leading integer, with its sign: `12 años` is 12,
`-4` is -4, `doce` is 0.

`experienciaprofesional` holds one position per line, written as
`Position - Institution`. Only the first hyphen separates the two parts.

Only the first line of `experienciaacademica` becomes an education entry. The
full text is kept in `academicExperience`.

### Institutions

| column | field | when blank |
|---|---|---|
| `id` | `id` | always `institution-<id>` |
| `nombre` | `name` | |
| `sector` | `type` | `Institución` |
| `descripcion` | `description` | |
| `imagen` | `imageUrl` | placeholder image |
| `direccion` | `address` | |
| `telefono` | `phone` | |
| `correo` | `email` | |
| `sitioweb` | `website` | |
| `horario` | `schedule` | |

The authorities and the budget of an institution are not part of the
spreadsheet and are always empty.

### Commissions

| column | field | when blank |
|---|---|---|
| `id` | `id` | `commission-<line>` |
| `nombre` | `name` | |
| `institucion` | `institution`, `purpose` | |
| `descripcion` | `description` | |
| `fechainicio` | `startDate` | |
| `fechafin` | `endDate` | |
| `comision` | `members` | no members |
| `requisitos` | `requirements` | no requirements |
| `infografiaURL` | `documents` | no infographic |
| `cronogramaURL` | `documents` | no schedule |

`comision` and `requisitos` are lists separated by `;`. Entries are trimmed and
empty entries are dropped, so `A;;B;` gives `A` and `B`, and a blank cell gives
an empty list. Every member has the role `Miembro`, and its institution is its
own name: the sheet only lists names.

Every commission is reported `En proceso`, with the single phase
`Convocatoria` marked `Completada`, and a candidate count of 0.

## Command line

```bash
justiciapedia --config datos/justiciapedia.json --out snapshot.json
```

The configuration file lists the sources:

```json
{
  "outputSettings": { "siteName": "Justiciapedia", "outputPath": "snapshot.json" },
  "sources": [
    { "dataset": "candidates", "provider": "csv", "filePath": "candidatos.csv" },
    { "dataset": "institutions", "provider": "excel", "filePath": "instituciones.xlsx",
      "excelWorksheetName": "Hoja1" },
    { "dataset": "commissions", "provider": "csv", "filePath": "comisiones.csv" }
  ]
}
```

Paths are relative to the configuration file. The sources can also be given
directly with `--candidates`, `--institutions` and `--commissions`, which take
precedence over the configuration file.

`--query` and `--status` restrict the published candidates.
`--reference` compares the output with a previous snapshot and fails if they
differ.

*/
